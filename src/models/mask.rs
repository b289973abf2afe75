use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// One independently selectable capture source.
///
/// Each variant names one way a medium can enter the pipeline: acquired
/// from local hardware by the pipeline itself, or pushed in by the
/// embedding application (screen recorder, drone feed, and similar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureType {
    /// Inner capture audio (local microphone).
    CaptureAudio = 0,
    /// Inner capture video (local camera).
    CaptureVideo = 1,
    /// External input audio (pushed by the application).
    InputAudio = 2,
    /// External input video (pushed by the application).
    InputVideo = 3,
}

impl CaptureType {
    /// The mask bit this capture type occupies.
    pub const fn bit(self) -> CaptureTypeMask {
        CaptureTypeMask::from_bits_retain(1 << self as u32)
    }
}

bitflags! {
    /// Requested combination of capture sources, one bit per [`CaptureType`].
    ///
    /// The embedding application assembles a mask from the named constants
    /// and hands it to [`CaptureTypeMask::validate`] at configuration time.
    /// The named unions never pair two sources for the same medium; that
    /// contract is enforced by `validate`, not by the type itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CaptureTypeMask: u32 {
        /// Inner capture audio only.
        const CAPTURE_AUDIO = 1 << CaptureType::CaptureAudio as u32;
        /// Inner capture video only.
        const CAPTURE_VIDEO = 1 << CaptureType::CaptureVideo as u32;
        /// External input audio only.
        const INPUT_AUDIO = 1 << CaptureType::InputAudio as u32;
        /// External input video only.
        const INPUT_VIDEO = 1 << CaptureType::InputVideo as u32;
        /// Inner capture for both media.
        const CAPTURE_ALL = Self::CAPTURE_AUDIO.bits() | Self::CAPTURE_VIDEO.bits();
        /// External input for both media.
        const INPUT_ALL = Self::INPUT_AUDIO.bits() | Self::INPUT_VIDEO.bits();
        /// Inner capture audio, external input video.
        const CAPTURE_AUDIO_INPUT_VIDEO = Self::CAPTURE_AUDIO.bits() | Self::INPUT_VIDEO.bits();
        /// Inner capture video, external input audio.
        const CAPTURE_VIDEO_INPUT_AUDIO = Self::CAPTURE_VIDEO.bits() | Self::INPUT_AUDIO.bits();
    }
}

impl Default for CaptureTypeMask {
    /// Inner capture of both audio and video.
    fn default() -> Self {
        Self::CAPTURE_ALL
    }
}

impl From<CaptureType> for CaptureTypeMask {
    fn from(ty: CaptureType) -> Self {
        ty.bit()
    }
}

impl CaptureTypeMask {
    /// Check the cross-bit contract and freeze the mask into a [`CaptureMode`].
    ///
    /// Each medium may come from at most one place. A mask that selects
    /// both inner capture and external input for the same medium is
    /// rejected, as is a mask that selects nothing at all. No defaulting
    /// happens on invalid input; callers wanting a fallback use
    /// [`CaptureMode::default`] explicitly.
    pub fn validate(self) -> Result<CaptureMode, ConfigError> {
        if self.is_empty() {
            return Err(ConfigError::EmptyMask);
        }
        if self.contains(Self::CAPTURE_AUDIO | Self::INPUT_AUDIO) {
            return Err(ConfigError::ConflictingAudioSource);
        }
        if self.contains(Self::CAPTURE_VIDEO | Self::INPUT_VIDEO) {
            return Err(ConfigError::ConflictingVideoSource);
        }

        let audio = if self.contains(Self::CAPTURE_AUDIO) {
            SourceMode::InternalCapture
        } else if self.contains(Self::INPUT_AUDIO) {
            SourceMode::ExternalInput
        } else {
            SourceMode::None
        };
        let video = if self.contains(Self::CAPTURE_VIDEO) {
            SourceMode::InternalCapture
        } else if self.contains(Self::INPUT_VIDEO) {
            SourceMode::ExternalInput
        } else {
            SourceMode::None
        };

        Ok(CaptureMode { audio, video })
    }
}

/// Where one medium's data comes from, decided per medium by the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    /// Medium not selected for this session.
    None,
    /// The pipeline captures from local hardware itself.
    InternalCapture,
    /// Frames are pushed in by the embedding application.
    ExternalInput,
}

impl SourceMode {
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A capture mask that passed validation.
///
/// Pure value: the source queries have no side effects, and re-validating
/// the same mask always yields the same classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureMode {
    audio: SourceMode,
    video: SourceMode,
}

impl CaptureMode {
    /// Where this session's audio comes from.
    pub fn audio_source(self) -> SourceMode {
        self.audio
    }

    /// Where this session's video comes from.
    pub fn video_source(self) -> SourceMode {
        self.video
    }

    /// The canonical bit pattern for this mode.
    pub fn mask(self) -> CaptureTypeMask {
        let mut mask = CaptureTypeMask::empty();
        match self.audio {
            SourceMode::InternalCapture => mask |= CaptureTypeMask::CAPTURE_AUDIO,
            SourceMode::ExternalInput => mask |= CaptureTypeMask::INPUT_AUDIO,
            SourceMode::None => {}
        }
        match self.video {
            SourceMode::InternalCapture => mask |= CaptureTypeMask::CAPTURE_VIDEO,
            SourceMode::ExternalInput => mask |= CaptureTypeMask::INPUT_VIDEO,
            SourceMode::None => {}
        }
        mask
    }
}

impl Default for CaptureMode {
    /// The validated form of [`CaptureTypeMask::CAPTURE_ALL`].
    fn default() -> Self {
        Self {
            audio: SourceMode::InternalCapture,
            video: SourceMode::InternalCapture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_type_bits_match_discriminants() {
        assert_eq!(CaptureType::CaptureAudio.bit().bits(), 1);
        assert_eq!(CaptureType::CaptureVideo.bit().bits(), 2);
        assert_eq!(CaptureType::InputAudio.bit().bits(), 4);
        assert_eq!(CaptureType::InputVideo.bit().bits(), 8);
    }

    #[test]
    fn single_bit_masks_classify_one_medium() {
        let mode = CaptureTypeMask::CAPTURE_AUDIO.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::InternalCapture);
        assert_eq!(mode.video_source(), SourceMode::None);

        let mode = CaptureTypeMask::CAPTURE_VIDEO.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::None);
        assert_eq!(mode.video_source(), SourceMode::InternalCapture);

        let mode = CaptureTypeMask::INPUT_AUDIO.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::ExternalInput);
        assert_eq!(mode.video_source(), SourceMode::None);

        let mode = CaptureTypeMask::INPUT_VIDEO.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::None);
        assert_eq!(mode.video_source(), SourceMode::ExternalInput);
    }

    #[test]
    fn capture_all_is_inner_capture_of_both_media() {
        let mode = CaptureTypeMask::CAPTURE_ALL.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::InternalCapture);
        assert_eq!(mode.video_source(), SourceMode::InternalCapture);
    }

    #[test]
    fn input_all_is_external_input_of_both_media() {
        let mode = CaptureTypeMask::INPUT_ALL.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::ExternalInput);
        assert_eq!(mode.video_source(), SourceMode::ExternalInput);
    }

    #[test]
    fn mixed_unions_split_per_medium() {
        let mode = CaptureTypeMask::CAPTURE_AUDIO_INPUT_VIDEO.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::InternalCapture);
        assert_eq!(mode.video_source(), SourceMode::ExternalInput);

        let mode = CaptureTypeMask::CAPTURE_VIDEO_INPUT_AUDIO.validate().unwrap();
        assert_eq!(mode.audio_source(), SourceMode::ExternalInput);
        assert_eq!(mode.video_source(), SourceMode::InternalCapture);
    }

    #[test]
    fn conflicting_audio_sources_rejected() {
        let mask = CaptureTypeMask::CAPTURE_AUDIO | CaptureTypeMask::INPUT_AUDIO;
        assert_eq!(mask.validate(), Err(ConfigError::ConflictingAudioSource));
    }

    #[test]
    fn conflicting_video_sources_rejected() {
        let mask = CaptureTypeMask::CAPTURE_VIDEO | CaptureTypeMask::INPUT_VIDEO;
        assert_eq!(mask.validate(), Err(ConfigError::ConflictingVideoSource));
    }

    #[test]
    fn audio_conflict_reported_before_video_conflict() {
        let mask = CaptureTypeMask::CAPTURE_ALL | CaptureTypeMask::INPUT_ALL;
        assert_eq!(mask.validate(), Err(ConfigError::ConflictingAudioSource));
    }

    #[test]
    fn empty_mask_rejected() {
        assert_eq!(
            CaptureTypeMask::empty().validate(),
            Err(ConfigError::EmptyMask)
        );
    }

    #[test]
    fn default_mask_is_capture_all_and_valid() {
        assert_eq!(CaptureTypeMask::default(), CaptureTypeMask::CAPTURE_ALL);
        assert_eq!(
            CaptureMode::default(),
            CaptureTypeMask::CAPTURE_ALL.validate().unwrap()
        );
    }

    #[test]
    fn validation_is_pure() {
        let mask = CaptureTypeMask::CAPTURE_AUDIO_INPUT_VIDEO;
        assert_eq!(mask.validate(), mask.validate());
    }

    #[test]
    fn mode_round_trips_to_canonical_bits() {
        for mask in [
            CaptureTypeMask::CAPTURE_AUDIO,
            CaptureTypeMask::INPUT_VIDEO,
            CaptureTypeMask::CAPTURE_ALL,
            CaptureTypeMask::INPUT_ALL,
            CaptureTypeMask::CAPTURE_AUDIO_INPUT_VIDEO,
            CaptureTypeMask::CAPTURE_VIDEO_INPUT_AUDIO,
        ] {
            assert_eq!(mask.validate().unwrap().mask(), mask);
        }
    }

    #[test]
    fn unknown_bits_rejected_at_the_boundary() {
        assert!(CaptureTypeMask::from_bits(1 << 4).is_none());
        assert_eq!(
            CaptureTypeMask::from_bits(0b0101),
            Some(CaptureTypeMask::CAPTURE_AUDIO | CaptureTypeMask::INPUT_AUDIO)
        );
    }
}
