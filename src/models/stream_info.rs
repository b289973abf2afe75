use serde::{Deserialize, Serialize};

/// Identity of the stream a session publishes to.
///
/// Plain data handed through to the transport layer outside this crate;
/// nothing here opens a connection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Stream id assigned by the media server.
    pub stream_id: String,

    /// Upload URL (RTMP or FLV-over-TCP endpoint).
    pub url: String,
}

/// Counters the running pipeline reports while a session is live.
///
/// Serializable for debug export to the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamDiagnostics {
    /// Audio buffers delivered to the encoder since start.
    pub captured_audio_count: u64,

    /// Video frames delivered to the encoder since start.
    pub captured_video_count: u64,

    /// Frames discarded under send-buffer pressure.
    pub dropped_frames: u64,

    /// All frames offered to the session since start.
    pub total_frames: u64,

    /// Bytes handed to the transport since start.
    pub bytes_sent: u64,

    /// Milliseconds since the stream went live.
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_info_round_trips_through_json() {
        let info = StreamInfo {
            stream_id: "s-42".into(),
            url: "rtmp://live.example.com/app/s-42".into(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(serde_json::from_str::<StreamInfo>(&json).unwrap(), info);
    }

    #[test]
    fn diagnostics_export_uses_snake_case_fields() {
        let json = serde_json::to_value(StreamDiagnostics::default()).unwrap();
        assert!(json.get("captured_audio_count").is_some());
        assert!(json.get("dropped_frames").is_some());
        assert!(json.get("elapsed_ms").is_some());
    }
}
