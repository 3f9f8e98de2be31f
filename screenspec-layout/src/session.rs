//! Latest-only generation.
//!
//! Every `generate` call takes a token from a monotonically increasing
//! counter. When a result arrives it is applied only if its token is still
//! the latest one issued; older results are dropped, whatever order they
//! resolve in.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, trace, warn};

use screenspec_fields::Pretty;

use crate::error::Result;
use crate::layout::{GenerateRequest, GeneratedLayout};
use crate::matcher::LayoutGenerator;

/// Identifies one generation request. Later requests have larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug, Default)]
struct SessionState {
    current: Option<GeneratedLayout>,
    /// Token of the last applied or failed request.
    settled: u64,
}

/// Owns the visible generated layout and applies only the newest result.
pub struct GenerationSession<G> {
    generator: G,
    issued: AtomicU64,
    state: RwLock<SessionState>,
}

impl<G: LayoutGenerator> GenerationSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            issued: AtomicU64::new(0),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Issue a fresh token, superseding every earlier one.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued token, if any.
    pub fn latest(&self) -> Option<RequestToken> {
        match self.issued.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RequestToken(n)),
        }
    }

    /// Apply a result if its token is still the latest.
    ///
    /// Returns the layout this token applied, or `None` when the result
    /// was stale or an error.
    pub async fn complete(
        &self,
        token: RequestToken,
        result: Result<GeneratedLayout>,
    ) -> Option<GeneratedLayout> {
        let mut state = self.state.write().await;
        if Some(token) != self.latest() {
            debug!(token = token.0, latest = ?self.latest().map(|t| t.0), "stale generation dropped");
            return None;
        }
        state.settled = token.0;
        match result {
            Ok(layout) => {
                debug!(token = token.0, title = %layout.title, "generation applied");
                trace!("generated fields: {}", Pretty(&layout.fields));
                state.current = Some(layout.clone());
                Some(layout)
            }
            Err(e) => {
                // Keep the previous layout visible.
                warn!(token = token.0, error = %e, "generation failed");
                None
            }
        }
    }

    /// Generate and apply if still latest.
    ///
    /// Returns the layout when it became the visible one, `None` when a
    /// newer request superseded it or generation failed.
    pub async fn generate(&self, request: &GenerateRequest) -> Option<GeneratedLayout> {
        let token = self.issue();
        debug!(token = token.0, title = %request.title(), "generation started");
        let result = self.generator.generate(request).await;
        self.complete(token, result).await
    }

    /// The visible layout.
    pub async fn current(&self) -> Option<GeneratedLayout> {
        self.state.read().await.current.clone()
    }

    /// Whether the latest request is still in flight.
    pub async fn is_generating(&self) -> bool {
        let settled = self.state.read().await.settled;
        self.latest().is_some_and(|t| t.0 > settled)
    }
}
