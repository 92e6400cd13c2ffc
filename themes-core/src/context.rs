//! Cancellation and deadline context for issue requests
//!
//! A [`RequestContext`] is handed verbatim to every fetch. It never stops a
//! request by itself; issue sources are expected to check it before calling
//! out and to race their call against [`RequestContext::done`].

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a context is no longer usable
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The context was cancelled by its owner
    #[error("request cancelled")]
    Cancelled,

    /// The context deadline passed
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation token plus optional deadline shared by all fetches of a call
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Context wrapping an existing cancellation token
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Replace the deadline, keeping the same cancellation token
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The deadline, if one was set
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this context and every clone of it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the context has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Reason the context is done, or `None` while it is still live
    ///
    /// Cancellation takes precedence over an expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            return Some(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolve once the context is cancelled or its deadline passes
    pub async fn done(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    () = self.token.cancelled() => {}
                    () = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_live() {
        let ctx = RequestContext::background();
        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
        assert_eq!(ctx.err(), None);
    }

    #[test]
    fn test_cancel_propagates_to_clones() {
        let ctx = RequestContext::background();
        let clone = ctx.clone();
        ctx.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(clone.err(), Some(ContextError::Cancelled));
    }

    #[test]
    fn test_from_token_shares_cancellation() {
        let token = CancellationToken::new();
        let ctx = RequestContext::from_token(token.clone());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(5));
        assert_eq!(ctx.err(), None);

        ctx.done().await;
        assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_wins_over_deadline() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(60));
        ctx.cancel();
        ctx.done().await;
        assert_eq!(ctx.err(), Some(ContextError::Cancelled));
    }
}
