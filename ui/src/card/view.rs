//! The rendered stats card. Pure projection of fetched stats; no owned state.

use dioxus::prelude::*;

use crate::core::format::{format_count, format_rate};
use crate::profile::{SolvedStats, SubmissionBucket};

#[component]
pub fn StatsCard(stats: SolvedStats, username: String) -> Element {
    let acceptance = stats.acceptance_rate().map(format_rate);

    rsx! {
        div { id: "stats-card", class: "stats-card",
            h2 { class: "stats-card__title", "{username}'s LeetCode Stats" }

            div { class: "stats-card__grid",
                MetricTile {
                    label: "Total Problems Solved",
                    value: stats.solved_problem,
                    tone: "total",
                }
                MetricTile {
                    label: "Easy Problems",
                    value: stats.easy_solved,
                    tone: "easy",
                }
                MetricTile {
                    label: "Medium Problems",
                    value: stats.medium_solved,
                    tone: "medium",
                }
                MetricTile {
                    label: "Hard Problems",
                    value: stats.hard_solved,
                    tone: "hard",
                }
            }

            if let Some(rate) = acceptance {
                p { class: "stats-card__acceptance", "Acceptance rate {rate}" }
            }

            BucketList {
                heading: "Total Submissions",
                buckets: stats.total_submissions.clone(),
            }
            BucketList {
                heading: "Accepted Submissions",
                buckets: stats.accepted_submissions.clone(),
            }
        }
    }
}

#[component]
fn MetricTile(label: &'static str, value: u64, tone: &'static str) -> Element {
    rsx! {
        div { class: "stats-card__tile stats-card__tile--{tone}",
            p { class: "stats-card__tile-label", "{label}" }
            p { class: "stats-card__tile-value", {format_count(value)} }
        }
    }
}

#[component]
fn BucketList(heading: &'static str, buckets: Vec<SubmissionBucket>) -> Element {
    let lines: Vec<(String, String)> = buckets
        .iter()
        .map(|bucket| {
            (
                bucket.difficulty.clone(),
                format!(
                    "{} problems ({} submissions)",
                    format_count(bucket.count),
                    format_count(bucket.submissions)
                ),
            )
        })
        .collect();

    rsx! {
        h3 { class: "stats-card__list-heading", "{heading}" }
        ul { class: "stats-card__list",
            for (difficulty, line) in lines.into_iter() {
                li { class: "stats-card__list-item",
                    strong { "{difficulty}: " }
                    "{line}"
                }
            }
        }
    }
}
