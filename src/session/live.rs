use std::sync::Arc;
use std::time::Instant;

use crate::models::config::SessionConfiguration;
use crate::models::error::ConfigError;
use crate::models::mask::{CaptureMode, SourceMode};
use crate::models::state::LiveState;
use crate::models::stream_info::{StreamDiagnostics, StreamInfo};
use crate::traits::session_delegate::SessionDelegate;

/// A configured live session.
///
/// Owns the frozen capture mode and quality settings, tracks the lifecycle
/// state machine, and collects the counters the pipeline reports. The
/// pipeline doing the actual capture, encoding, and publishing lives
/// outside this crate and drives the session through the lifecycle methods
/// below.
///
/// The capture mode is fixed for the session's lifetime. Switching sources
/// means tearing the pipeline down and configuring a new session.
pub struct LiveSession {
    id: String,
    created_at: String,
    config: SessionConfiguration,
    mode: CaptureMode,
    state: LiveState,
    stream_info: Option<StreamInfo>,
    diagnostics: StreamDiagnostics,
    started_at: Option<Instant>,
    failure_reason: Option<String>,
    delegate: Option<Arc<dyn SessionDelegate>>,
}

impl std::fmt::Debug for LiveSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSession")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("stream_info", &self.stream_info)
            .field("diagnostics", &self.diagnostics)
            .field("started_at", &self.started_at)
            .field("failure_reason", &self.failure_reason)
            .field("delegate", &self.delegate.as_ref().map(|_| "SessionDelegate"))
            .finish()
    }
}

impl LiveSession {
    /// Validate `config` and freeze it into a session in the ready state.
    pub fn configure(config: SessionConfiguration) -> Result<Self, ConfigError> {
        let mode = config.validate()?;
        let id = uuid::Uuid::new_v4().to_string();
        log::info!(
            "session {} configured: audio={:?} video={:?}",
            id,
            mode.audio_source(),
            mode.video_source()
        );
        Ok(Self {
            id,
            created_at: chrono::Utc::now().to_rfc3339(),
            config,
            mode,
            state: LiveState::Ready,
            stream_info: None,
            diagnostics: StreamDiagnostics::default(),
            started_at: None,
            failure_reason: None,
            delegate: None,
        })
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn SessionDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// RFC 3339 timestamp of when the session was configured.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn config(&self) -> &SessionConfiguration {
        &self.config
    }

    /// The validated capture mode this session was configured with.
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    pub fn stream_info(&self) -> Option<&StreamInfo> {
        self.stream_info.as_ref()
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Whether the embedding application must push audio frames itself.
    pub fn expects_external_audio(&self) -> bool {
        self.mode.audio_source() == SourceMode::ExternalInput
    }

    /// Whether the embedding application must push video frames itself.
    pub fn expects_external_video(&self) -> bool {
        self.mode.video_source() == SourceMode::ExternalInput
    }

    /// Request the pipeline start publishing to `stream`.
    /// Transitions: ready/stopped → pending. Resets the counters.
    pub fn start(&mut self, stream: StreamInfo) -> Result<(), ConfigError> {
        self.check_transition(LiveState::Pending, "start")?;
        self.stream_info = Some(stream);
        self.diagnostics = StreamDiagnostics::default();
        self.started_at = None;
        self.set_state(LiveState::Pending);
        Ok(())
    }

    /// The pipeline reports the stream is up and frames are flowing.
    /// Transitions: pending/refreshing → streaming.
    pub fn mark_streaming(&mut self) -> Result<(), ConfigError> {
        self.check_transition(LiveState::Streaming, "mark_streaming")?;
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        self.set_state(LiveState::Streaming);
        Ok(())
    }

    /// The pipeline lost the connection and is re-establishing it.
    /// Transitions: streaming → refreshing.
    pub fn refresh(&mut self) -> Result<(), ConfigError> {
        self.check_transition(LiveState::Refreshing, "refresh")?;
        self.set_state(LiveState::Refreshing);
        Ok(())
    }

    /// Stop the session. Publishes the final counters, then transitions
    /// pending/streaming/refreshing → stopped.
    pub fn stop(&mut self) -> Result<(), ConfigError> {
        self.check_transition(LiveState::Stopped, "stop")?;
        self.publish_diagnostics();
        self.set_state(LiveState::Stopped);
        Ok(())
    }

    /// The pipeline reports an unrecoverable failure. Terminal.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), ConfigError> {
        self.check_transition(LiveState::Failed, "fail")?;
        let reason = reason.into();
        log::error!("session {} failed: {}", self.id, reason);
        self.failure_reason = Some(reason.clone());
        self.set_state(LiveState::Failed);
        if let Some(ref delegate) = self.delegate {
            delegate.on_error(&reason);
        }
        Ok(())
    }

    // --- Diagnostics ---

    /// Record one audio buffer delivered to the encoder.
    pub fn record_audio_buffer(&mut self) {
        self.diagnostics.captured_audio_count += 1;
        self.diagnostics.total_frames += 1;
    }

    /// Record one video frame delivered to the encoder.
    pub fn record_video_frame(&mut self) {
        self.diagnostics.captured_video_count += 1;
        self.diagnostics.total_frames += 1;
    }

    /// Record frames the pipeline discarded under pressure.
    pub fn record_dropped_frames(&mut self, count: u64) {
        self.diagnostics.dropped_frames += count;
    }

    /// Record bytes handed to the transport.
    pub fn record_bytes_sent(&mut self, bytes: u64) {
        self.diagnostics.bytes_sent += bytes;
    }

    /// Current counters with elapsed time refreshed.
    pub fn diagnostics(&self) -> StreamDiagnostics {
        let mut snapshot = self.diagnostics;
        snapshot.elapsed_ms = self
            .started_at
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0);
        snapshot
    }

    /// Snapshot the counters and notify the delegate.
    pub fn publish_diagnostics(&mut self) -> StreamDiagnostics {
        self.diagnostics = self.diagnostics();
        if let Some(ref delegate) = self.delegate {
            delegate.on_diagnostics_updated(&self.diagnostics);
        }
        self.diagnostics
    }

    // --- Internal helpers ---

    fn check_transition(&self, next: LiveState, op: &str) -> Result<(), ConfigError> {
        if self.state.can_transition_to(next) {
            Ok(())
        } else {
            Err(ConfigError::InvalidSessionState(format!(
                "cannot {} from {:?} state",
                op, self.state
            )))
        }
    }

    fn set_state(&mut self, next: LiveState) {
        log::info!("session {}: {:?} -> {:?}", self.id, self.state, next);
        self.state = next;
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(next);
        }
    }
}
