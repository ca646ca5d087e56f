//! Shared lookup state and its named transitions.
//!
//! The view never pokes fields directly: every change flows through one of
//! the transitions below, so the fetch lifecycle stays deterministic and
//! testable without a live network. Each submission is stamped with a
//! monotonically increasing ticket; a resolution carrying a superseded
//! ticket is discarded, so overlapping requests settle in favor of the
//! newest submission rather than the last response to arrive.

use super::error::FetchError;
use super::stats::SolvedStats;

/// Handle identifying one submitted lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Coarse lifecycle phase derived from the state record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Loading,
    Settled,
}

/// The one shared record behind the page: query text, loading flag, and
/// at most one of {stats, error}.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    pub query: String,
    pub loading: bool,
    pub stats: Option<SolvedStats>,
    pub error: Option<FetchError>,
    issued: u64,
    current: Option<u64>,
}

impl LookupState {
    /// Replace the query verbatim. No trimming, no validation.
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
    }

    /// Begin a lookup for the current query.
    ///
    /// Empty queries are a no-op: no ticket, no state change. Otherwise any
    /// previous result or error is cleared before the network call starts,
    /// so stale data never shows next to a newer outcome.
    pub fn begin_submit(&mut self) -> Option<LookupTicket> {
        if self.query.is_empty() {
            return None;
        }

        self.stats = None;
        self.error = None;
        self.loading = true;
        self.issued += 1;
        self.current = Some(self.issued);
        Some(LookupTicket(self.issued))
    }

    /// Apply a successful outcome. Superseded tickets are discarded.
    pub fn resolve_success(&mut self, ticket: LookupTicket, stats: SolvedStats) {
        if !self.is_current(ticket) {
            return;
        }
        self.stats = Some(stats);
        self.error = None;
        self.settle();
    }

    /// Apply a failed outcome. Superseded tickets are discarded.
    pub fn resolve_failure(&mut self, ticket: LookupTicket, error: FetchError) {
        if !self.is_current(ticket) {
            return;
        }
        self.error = Some(error);
        self.stats = None;
        self.settle();
    }

    /// Whether `ticket` is the newest submission still awaiting a result.
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.current == Some(ticket.0)
    }

    pub fn phase(&self) -> LookupPhase {
        if self.loading {
            LookupPhase::Loading
        } else if self.stats.is_some() || self.error.is_some() {
            LookupPhase::Settled
        } else {
            LookupPhase::Idle
        }
    }

    fn settle(&mut self) {
        self.loading = false;
        self.current = None;
    }
}
