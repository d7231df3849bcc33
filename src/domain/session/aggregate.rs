//! Session aggregate.
//!
//! One user's ordered sequence of dilemma responses. A session
//! accumulates responses until it reaches its target count, then flips
//! to complete exactly once; a complete session's response set is
//! immutable and is consumed as a read-only snapshot by the analyzer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

use super::{Response, SessionError};

/// Default number of dilemmas answered per session.
pub const DEFAULT_SESSION_TARGET: usize = 12;

/// A response-collection session.
///
/// # Invariants
///
/// - At most one response per dilemma
/// - `complete` transitions false -> true exactly once, when the
///   response count reaches `target`
/// - No responses can be recorded after completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    responses: Vec<Response>,
    target: usize,
    complete: bool,
    started_at: Timestamp,
}

impl Session {
    /// Creates an empty session expecting `target` responses.
    pub fn new(id: SessionId, target: usize) -> Result<Self, SessionError> {
        if target == 0 {
            return Err(SessionError::InvalidTarget);
        }
        Ok(Self {
            id,
            responses: Vec::with_capacity(target),
            target,
            complete: false,
            started_at: Timestamp::now(),
        })
    }

    /// Records a response.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` if the session has reached its target
    /// - `DuplicateResponse` if this dilemma was already answered
    pub fn record_response(&mut self, response: Response) -> Result<(), SessionError> {
        if self.complete {
            return Err(SessionError::AlreadyComplete);
        }
        if self
            .responses
            .iter()
            .any(|r| r.dilemma_id() == response.dilemma_id())
        {
            return Err(SessionError::DuplicateResponse {
                dilemma_id: response.dilemma_id().clone(),
            });
        }

        self.responses.push(response);
        if self.responses.len() >= self.target {
            self.complete = true;
        }
        Ok(())
    }

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the recorded responses in answer order.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Returns the number of recorded responses.
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    /// Returns the expected number of responses.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns whether the session has reached its target.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns when the session was started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }
}
