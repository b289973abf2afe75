//! # live-capture-core
//!
//! Platform-agnostic core for a live-streaming capture SDK.
//!
//! Owns the configuration vocabulary and session lifecycle that a
//! downstream capture/encode/publish pipeline consumes: which source feeds
//! each medium (inner hardware capture vs. externally pushed frames),
//! per-medium quality settings, and the state machine of a running
//! session. Everything doing real work (camera/microphone capture,
//! encoders, RTMP/FLV transport) lives outside this crate and is driven by
//! the validated values produced here.
//!
//! ## Architecture
//!
//! ```text
//! live-capture-core (this crate)
//! ├── models/   ← CaptureTypeMask, CaptureMode, SessionConfiguration,
//! │               ConfigError, LiveState, StreamInfo, StreamDiagnostics
//! ├── traits/   ← SessionDelegate
//! └── session/  ← LiveSession (validate-once, immutable session coordinator)
//! ```

pub mod models;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::{AudioConfiguration, SessionConfiguration, VideoConfiguration};
pub use models::error::ConfigError;
pub use models::mask::{CaptureMode, CaptureType, CaptureTypeMask, SourceMode};
pub use models::state::LiveState;
pub use models::stream_info::{StreamDiagnostics, StreamInfo};
pub use session::live::LiveSession;
pub use traits::session_delegate::SessionDelegate;
