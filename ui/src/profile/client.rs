//! HTTP client for the community solved-stats endpoint.

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde_json::Value;

use super::error::FetchError;
use super::stats::SolvedStats;

/// Host serving the community LeetCode statistics API.
pub const API_BASE: &str = "https://alfa-leetcode-api.onrender.com";

/// Placeholder when an `errors` payload carries no usable message.
const UNKNOWN_ERROR: &str = "Unknown error.";

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Fetch the solved-problem summary for `username`.
///
/// The username is interpolated into the path exactly as typed. The API
/// reports unknown users through an `errors` array in an otherwise
/// successful response, so a 2xx body is classified before it is treated
/// as stats. Non-2xx statuses and decode failures are transport errors.
pub async fn fetch_solved(username: &str) -> Result<SolvedStats, FetchError> {
    let outcome = request_solved(username).await;
    if let Err(err) = &outcome {
        warn!(%username, %err, "profile lookup failed");
    }
    outcome
}

async fn request_solved(username: &str) -> Result<SolvedStats, FetchError> {
    let url = format!("{API_BASE}/{username}/solved");

    let payload: Value = HTTP
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| FetchError::Transport(err.to_string()))?
        .json()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    classify_payload(payload)
}

/// Split a response body into stats or a classified failure.
///
/// A body carrying an `errors` field is a domain failure regardless of the
/// HTTP status that delivered it. The first error's `message` decides the
/// classification; an empty or shapeless `errors` value falls back to a
/// placeholder. Anything else is decoded as [`SolvedStats`].
pub fn classify_payload(payload: Value) -> Result<SolvedStats, FetchError> {
    if let Some(errors) = payload.get("errors") {
        let message = errors
            .get(0)
            .and_then(|entry| entry.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR);
        return Err(FetchError::from_api_message(message));
    }

    serde_json::from_value(payload).map_err(|err| FetchError::Api(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::error::NOT_FOUND_SENTINEL;

    #[test]
    fn success_body_becomes_stats() {
        let stats = classify_payload(serde_json::json!({
            "solvedProblem": 10,
            "easySolved": 5,
            "mediumSolved": 4,
            "hardSolved": 1,
            "totalSubmissionNum": [
                { "difficulty": "All", "count": 10, "submissions": 30 }
            ],
            "acSubmissionNum": [
                { "difficulty": "All", "count": 10, "submissions": 15 }
            ]
        }))
        .unwrap();

        assert_eq!(stats.solved_problem, 10);
        assert_eq!(stats.total_submissions[0].submissions, 30);
    }

    #[test]
    fn sentinel_error_body_is_not_found() {
        let outcome = classify_payload(serde_json::json!({
            "errors": [{ "message": NOT_FOUND_SENTINEL }]
        }));

        assert_eq!(outcome, Err(FetchError::NotFound));
    }

    #[test]
    fn other_error_messages_are_api_failures() {
        let outcome = classify_payload(serde_json::json!({
            "errors": [{ "message": "rate limited" }]
        }));

        assert_eq!(outcome, Err(FetchError::Api("rate limited".into())));
    }

    #[test]
    fn shapeless_errors_fall_back_to_placeholder() {
        for body in [
            serde_json::json!({ "errors": [] }),
            serde_json::json!({ "errors": [{}] }),
            serde_json::json!({ "errors": "nope" }),
        ] {
            assert_eq!(
                classify_payload(body),
                Err(FetchError::Api(UNKNOWN_ERROR.into()))
            );
        }
    }

    #[test]
    fn malformed_success_body_is_an_api_failure() {
        let outcome = classify_payload(serde_json::json!({ "solvedProblem": "many" }));

        assert!(matches!(outcome, Err(FetchError::Api(_))));
    }
}
