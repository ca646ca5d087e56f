//! Profile lookup: payload model, fetch client, and shared state.

pub mod client;
pub mod error;
pub mod state;
pub mod stats;

pub use error::FetchError;
pub use state::{LookupPhase, LookupState, LookupTicket};
pub use stats::{SolvedStats, SubmissionBucket};
