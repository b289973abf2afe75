use crate::models::state::LiveState;
use crate::models::stream_info::StreamDiagnostics;

/// Event delegate for live session notifications.
///
/// All methods have empty default bodies so implementations override only
/// what they care about. Callbacks fire synchronously on whichever thread
/// drives the session; marshal to the UI thread if needed.
pub trait SessionDelegate: Send + Sync {
    /// Called when the session state changes.
    fn on_state_changed(&self, _state: LiveState) {}

    /// Called when fresh diagnostics counters are published.
    fn on_diagnostics_updated(&self, _diagnostics: &StreamDiagnostics) {}

    /// Called when the pipeline reports an unrecoverable failure.
    fn on_error(&self, _reason: &str) {}
}
