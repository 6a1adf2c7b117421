//! Per-instance liveness flag.
//!
//! True from construction until the owning UI surface is torn down, then
//! permanently false. Every asynchronous resolution handler consults it
//! before writing state, which makes teardown act as best-effort
//! cancellation of observable effects (not of the underlying call).

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default)]
pub struct Liveness {
    token: CancellationToken,
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the owning surface still exists.
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Flips the flag. Idempotent; the flag never comes back.
    pub fn retire(&self) {
        self.token.cancel();
    }
}
