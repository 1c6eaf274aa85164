use crate::error::{Result, VouchError};
use crate::types::ReportData;

/// Where the front-end is in the analysis lifecycle.
#[derive(Debug)]
pub enum SessionState {
    Idle,
    Processing,
    Report(ReportData),
    Failed(String),
}

/// Completion ticket for one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

/// Single-flight analysis session.
///
/// At most one request is pending at a time, and a completion is applied
/// only while its token matches the current generation. A response that
/// arrives after `reset` carries a stale token and is dropped, so it can
/// never overwrite the cleared state.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, SessionState::Processing)
    }

    /// Admit a new request. Refused while one is already in flight.
    pub fn begin(&mut self) -> Result<RequestToken> {
        if self.is_processing() {
            return Err(VouchError::AnalysisInFlight);
        }
        self.generation += 1;
        self.state = SessionState::Processing;
        Ok(RequestToken {
            generation: self.generation,
        })
    }

    /// Clear the session. Any outstanding request becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
    }

    /// Apply a request outcome. Returns false when the token is stale and
    /// the outcome was dropped.
    pub fn finish(&mut self, token: RequestToken, outcome: Result<ReportData>) -> bool {
        if token.generation != self.generation || !self.is_processing() {
            return false;
        }
        self.state = match outcome {
            Ok(report) => SessionState::Report(report),
            Err(e) => SessionState::Failed(e.to_string()),
        };
        true
    }

    pub fn report(&self) -> Option<&ReportData> {
        match &self.state {
            SessionState::Report(report) => Some(report),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
