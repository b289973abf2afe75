use serde::{Deserialize, Serialize};

/// Live session state machine.
///
/// State transitions:
/// ```text
/// ready → pending → streaming ↔ refreshing
///             ↓         ↓            ↓
///          stopped ← ───┴─────→ failed
/// ```
/// A stopped session may start again (`stopped → pending`); a failed
/// session is terminal and must be reconfigured from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveState {
    /// Configured, not yet started.
    Ready,
    /// Start requested, pipeline coming up.
    Pending,
    /// Frames are flowing.
    Streaming,
    /// Connection lost, pipeline re-establishing it.
    Refreshing,
    /// Stopped by request.
    Stopped,
    /// Unrecoverable failure reported by the pipeline.
    Failed,
}

impl LiveState {
    pub fn is_streaming(self) -> bool {
        matches!(self, Self::Streaming)
    }

    /// Whether the session has been started and not yet torn down.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Pending | Self::Streaming | Self::Refreshing)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Whether the state graph allows moving to `next`.
    pub fn can_transition_to(self, next: LiveState) -> bool {
        use LiveState::*;
        matches!(
            (self, next),
            (Ready, Pending)
                | (Stopped, Pending)
                | (Pending, Streaming)
                | (Pending, Stopped)
                | (Pending, Failed)
                | (Streaming, Refreshing)
                | (Streaming, Stopped)
                | (Streaming, Failed)
                | (Refreshing, Streaming)
                | (Refreshing, Stopped)
                | (Refreshing, Failed)
        )
    }
}
