//! Typed view of the `/{username}/solved` success payload.

use serde::{Deserialize, Serialize};

/// Difficulty label the upstream API uses for the aggregate bucket.
const OVERALL_DIFFICULTY: &str = "All";

/// One difficulty bucket from a submission breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionBucket {
    pub difficulty: String,
    pub count: u64,
    pub submissions: u64,
}

/// Parsed solved-problem summary for one user.
///
/// Field names mirror the upstream camelCase payload; the two breakdown
/// lists keep the order the API returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedStats {
    pub solved_problem: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    #[serde(rename = "totalSubmissionNum", default)]
    pub total_submissions: Vec<SubmissionBucket>,
    #[serde(rename = "acSubmissionNum", default)]
    pub accepted_submissions: Vec<SubmissionBucket>,
}

impl SolvedStats {
    /// Aggregate bucket ("All") from the total-submissions breakdown.
    pub fn overall_total(&self) -> Option<&SubmissionBucket> {
        self.total_submissions
            .iter()
            .find(|bucket| bucket.difficulty == OVERALL_DIFFICULTY)
    }

    /// Aggregate bucket ("All") from the accepted-submissions breakdown.
    pub fn overall_accepted(&self) -> Option<&SubmissionBucket> {
        self.accepted_submissions
            .iter()
            .find(|bucket| bucket.difficulty == OVERALL_DIFFICULTY)
    }

    /// Overall acceptance rate in percent, when both aggregate buckets are
    /// present and at least one submission exists.
    pub fn acceptance_rate(&self) -> Option<f64> {
        let total = self.overall_total()?.submissions;
        let accepted = self.overall_accepted()?.submissions;
        if total == 0 {
            return None;
        }
        Some(accepted as f64 / total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "solvedProblem": 354,
            "easySolved": 152,
            "mediumSolved": 168,
            "hardSolved": 34,
            "totalSubmissionNum": [
                { "difficulty": "All", "count": 354, "submissions": 1204 },
                { "difficulty": "Easy", "count": 152, "submissions": 360 },
                { "difficulty": "Medium", "count": 168, "submissions": 640 },
                { "difficulty": "Hard", "count": 34, "submissions": 204 }
            ],
            "acSubmissionNum": [
                { "difficulty": "All", "count": 354, "submissions": 602 },
                { "difficulty": "Easy", "count": 152, "submissions": 210 },
                { "difficulty": "Medium", "count": 168, "submissions": 310 },
                { "difficulty": "Hard", "count": 34, "submissions": 82 }
            ]
        })
    }

    #[test]
    fn deserializes_upstream_field_names() {
        let stats: SolvedStats = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(stats.solved_problem, 354);
        assert_eq!(stats.easy_solved, 152);
        assert_eq!(stats.medium_solved, 168);
        assert_eq!(stats.hard_solved, 34);
        assert_eq!(stats.total_submissions.len(), 4);
        assert_eq!(stats.accepted_submissions[0].difficulty, "All");
        assert_eq!(stats.accepted_submissions[0].submissions, 602);
    }

    #[test]
    fn breakdown_lists_default_to_empty() {
        let stats: SolvedStats = serde_json::from_value(serde_json::json!({
            "solvedProblem": 1,
            "easySolved": 1,
            "mediumSolved": 0,
            "hardSolved": 0
        }))
        .unwrap();

        assert!(stats.total_submissions.is_empty());
        assert!(stats.accepted_submissions.is_empty());
        assert_eq!(stats.acceptance_rate(), None);
    }

    #[test]
    fn acceptance_rate_uses_aggregate_buckets() {
        let stats: SolvedStats = serde_json::from_value(sample_json()).unwrap();

        let rate = stats.acceptance_rate().unwrap();
        assert!((rate - 50.0).abs() < 0.01, "expected ~50%, got {rate}");
    }

    #[test]
    fn acceptance_rate_none_without_submissions() {
        let mut stats: SolvedStats = serde_json::from_value(sample_json()).unwrap();
        for bucket in &mut stats.total_submissions {
            bucket.submissions = 0;
        }

        assert_eq!(stats.acceptance_rate(), None);
    }
}
