use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::mask::{CaptureMode, CaptureTypeMask};

/// Sample rates the audio encoder accepts.
pub const SUPPORTED_SAMPLE_RATES: [u32; 3] = [16_000, 44_100, 48_000];

const AUDIO_BITRATE_RANGE: std::ops::RangeInclusive<u32> = 32_000..=128_000;
const VIDEO_BITRATE_RANGE: std::ops::RangeInclusive<u32> = 100_000..=8_000_000;
const MAX_FRAME_RATE: u32 = 60;

/// Audio quality settings for the encoder feeding the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfiguration {
    /// Sample rate in Hz. Supported: 16000, 44100, 48000.
    pub sample_rate: u32,

    /// Channel count: 1 (mono) or 2 (stereo).
    pub channels: u16,

    /// Target bitrate in bit/s, 32 to 128 kbit/s.
    pub bitrate: u32,
}

impl AudioConfiguration {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(ConfigError::UnsupportedSampleRate(self.sample_rate));
        }
        if !matches!(self.channels, 1 | 2) {
            return Err(ConfigError::UnsupportedChannelCount(self.channels));
        }
        if !AUDIO_BITRATE_RANGE.contains(&self.bitrate) {
            return Err(ConfigError::AudioBitrateOutOfRange(self.bitrate));
        }
        Ok(())
    }
}

impl Default for AudioConfiguration {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            bitrate: 96_000,
        }
    }
}

/// Video quality settings for the encoder feeding the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConfiguration {
    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Target frame rate, 1 to 60 fps.
    pub frame_rate: u32,

    /// Target bitrate in bit/s.
    pub bitrate: u32,

    /// Keyframe interval in frames (typically 2x the frame rate).
    pub max_keyframe_interval: u32,
}

impl VideoConfiguration {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidVideoSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::UnsupportedFrameRate(self.frame_rate));
        }
        if !VIDEO_BITRATE_RANGE.contains(&self.bitrate) {
            return Err(ConfigError::VideoBitrateOutOfRange(self.bitrate));
        }
        Ok(())
    }
}

impl Default for VideoConfiguration {
    /// Portrait 720x1280 at 24 fps, suited to phone streaming.
    fn default() -> Self {
        Self {
            width: 720,
            height: 1280,
            frame_rate: 24,
            bitrate: 800_000,
            max_keyframe_interval: 48,
        }
    }
}

/// Complete configuration handed to [`crate::LiveSession::configure`].
///
/// The mask decides which media the session carries; only the quality
/// settings of enabled media are validated, since the pipeline ignores the
/// rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfiguration {
    /// Requested combination of capture sources.
    pub mask: CaptureTypeMask,

    /// Audio quality settings, ignored when the mask carries no audio bit.
    pub audio: AudioConfiguration,

    /// Video quality settings, ignored when the mask carries no video bit.
    pub video: VideoConfiguration,
}

impl SessionConfiguration {
    /// Validate the mask, then the quality settings of the enabled media.
    pub fn validate(&self) -> Result<CaptureMode, ConfigError> {
        let mode = self.mask.validate()?;
        if mode.audio_source().is_enabled() {
            self.audio.validate()?;
        }
        if mode.video_source().is_enabled() {
            self.video.validate()?;
        }
        Ok(mode)
    }
}
