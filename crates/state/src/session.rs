//! Manager lifetimes.
//!
//! A [`Session`] owns a root [`CancellationToken`]; every manager receives a
//! child token. Ending the session (or cancelling one manager's token)
//! abandons in-flight requests and turns later calls into no-ops.

use std::future::Future;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: CancellationToken,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for a manager bound to this session.
    pub fn scope(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Tear down every manager bound to this session.
    pub fn end(&self) {
        self.token.cancel();
    }

    pub fn is_ended(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Await `fut` unless `cancel` fires first. `None` means the result was
/// abandoned.
pub(crate) async fn unless_cancelled<F: Future>(
    cancel: &CancellationToken,
    fut: F,
) -> Option<F::Output> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => None,
        output = fut => Some(output),
    }
}
