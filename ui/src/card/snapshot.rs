//! Pure SVG rendition of the stats card.
//!
//! The snapshot is what the platform rasterizers consume, so it carries the
//! same content as the rendered card without touching any live DOM. All
//! user-controlled text is XML-escaped before it lands in the markup.

use crate::core::format::{format_count, format_rate};
use crate::profile::SolvedStats;

pub const SNAPSHOT_WIDTH: u32 = 960;
pub const SNAPSHOT_HEIGHT: u32 = 600;

const FONT_STACK: &str = "Inter, 'Segoe UI', sans-serif";

struct Tile {
    label: &'static str,
    value: u64,
    accent: &'static str,
}

/// Build the SVG snapshot for `username`'s card.
pub fn svg_snapshot(stats: &SolvedStats, username: &str) -> String {
    let title = xml_escape(&format!("{username}'s LeetCode Stats"));
    let tiles = [
        Tile {
            label: "Total Solved",
            value: stats.solved_problem,
            accent: "#5b8def",
        },
        Tile {
            label: "Easy",
            value: stats.easy_solved,
            accent: "#3fb68b",
        },
        Tile {
            label: "Medium",
            value: stats.medium_solved,
            accent: "#e0a83c",
        },
        Tile {
            label: "Hard",
            value: stats.hard_solved,
            accent: "#e06c5b",
        },
    ];

    let mut body = String::new();

    body.push_str(&format!(
        "<text x='48' y='84' fill='#f5f7fb' font-family=\"{FONT_STACK}\" font-size='40' font-weight='700'>{title}</text>\n"
    ));

    for (idx, tile) in tiles.iter().enumerate() {
        let x = 48 + idx as u32 * 222;
        body.push_str(&format!(
            "<rect x='{x}' y='124' width='198' height='124' rx='14' fill='#1b2130' stroke='{accent}' stroke-width='2'/>\n",
            accent = tile.accent
        ));
        body.push_str(&format!(
            "<text x='{tx}' y='168' fill='rgba(245,247,251,0.66)' font-family=\"{FONT_STACK}\" font-size='18'>{label}</text>\n",
            tx = x + 20,
            label = tile.label
        ));
        body.push_str(&format!(
            "<text x='{tx}' y='220' fill='{accent}' font-family=\"{FONT_STACK}\" font-size='40' font-weight='700'>{value}</text>\n",
            tx = x + 20,
            accent = tile.accent,
            value = format_count(tile.value)
        ));
    }

    if let Some(rate) = stats.acceptance_rate() {
        body.push_str(&format!(
            "<text x='48' y='292' fill='rgba(245,247,251,0.8)' font-family=\"{FONT_STACK}\" font-size='20'>Acceptance rate {}</text>\n",
            format_rate(rate)
        ));
    }

    body.push_str(&bucket_column(
        "Total Submissions",
        48,
        &stats.total_submissions,
    ));
    body.push_str(&bucket_column(
        "Accepted Submissions",
        504,
        &stats.accepted_submissions,
    ));

    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{SNAPSHOT_WIDTH}' height='{SNAPSHOT_HEIGHT}' viewBox='0 0 {SNAPSHOT_WIDTH} {SNAPSHOT_HEIGHT}'>\n\
         <defs>\n\
         <linearGradient id='bg' x1='0' y1='0' x2='1' y2='1'>\n\
         <stop offset='0%' stop-color='#151923'/>\n\
         <stop offset='100%' stop-color='#0f1116'/>\n\
         </linearGradient>\n\
         </defs>\n\
         <rect width='{SNAPSHOT_WIDTH}' height='{SNAPSHOT_HEIGHT}' fill='url(#bg)'/>\n\
         {body}</svg>"
    )
}

fn bucket_column(heading: &str, x: u32, buckets: &[crate::profile::SubmissionBucket]) -> String {
    let mut column = format!(
        "<text x='{x}' y='344' fill='#f5f7fb' font-family=\"{FONT_STACK}\" font-size='24' font-weight='600'>{heading}</text>\n"
    );

    let mut y = 384;
    for bucket in buckets {
        column.push_str(&format!(
            "<text x='{x}' y='{y}' fill='rgba(245,247,251,0.72)' font-family=\"{FONT_STACK}\" font-size='18'>{difficulty}: {count} problems ({submissions} submissions)</text>\n",
            difficulty = xml_escape(&bucket.difficulty),
            count = format_count(bucket.count),
            submissions = format_count(bucket.submissions),
        ));
        y += 34;
    }

    column
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_fixture() -> SolvedStats {
        serde_json::from_value(serde_json::json!({
            "solvedProblem": 354,
            "easySolved": 152,
            "mediumSolved": 168,
            "hardSolved": 34,
            "totalSubmissionNum": [
                { "difficulty": "All", "count": 354, "submissions": 1204 }
            ],
            "acSubmissionNum": [
                { "difficulty": "All", "count": 354, "submissions": 602 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn snapshot_carries_card_content() {
        let svg = svg_snapshot(&stats_fixture(), "emma");

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("emma&apos;s LeetCode Stats"));
        assert!(svg.contains("Total Solved"));
        assert!(svg.contains(">354<"));
        assert!(svg.contains("1,204"));
        assert!(svg.contains("Acceptance rate 50.0%"));
        assert!(svg.contains("Accepted Submissions"));
    }

    #[test]
    fn user_content_is_xml_escaped() {
        let svg = svg_snapshot(&stats_fixture(), "<script>&co");

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;&amp;co"));
    }

    #[test]
    fn acceptance_line_is_omitted_without_buckets() {
        let mut stats = stats_fixture();
        stats.total_submissions.clear();

        let svg = svg_snapshot(&stats, "emma");
        assert!(!svg.contains("Acceptance rate"));
    }
}
