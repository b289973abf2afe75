use thiserror::Error;

/// Errors that can occur while validating a session configuration.
///
/// All variants are local, synchronous, configuration-time failures
/// returned before a session starts. Retrying with the same input cannot
/// succeed; the caller must present a corrected configuration (or opt into
/// the defaults explicitly).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("capture mask selects no source")]
    EmptyMask,

    #[error("capture mask selects both inner capture and external input for audio")]
    ConflictingAudioSource,

    #[error("capture mask selects both inner capture and external input for video")]
    ConflictingVideoSource,

    #[error("unsupported audio sample rate: {0} Hz")]
    UnsupportedSampleRate(u32),

    #[error("unsupported audio channel count: {0}")]
    UnsupportedChannelCount(u16),

    #[error("audio bitrate out of range: {0} bit/s")]
    AudioBitrateOutOfRange(u32),

    #[error("invalid video size: {width}x{height}")]
    InvalidVideoSize { width: u32, height: u32 },

    #[error("unsupported video frame rate: {0} fps")]
    UnsupportedFrameRate(u32),

    #[error("video bitrate out of range: {0} bit/s")]
    VideoBitrateOutOfRange(u32),

    #[error("invalid session state: {0}")]
    InvalidSessionState(String),
}
