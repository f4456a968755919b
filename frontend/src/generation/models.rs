use serde::{Deserialize, Serialize};

/// Video lengths offered by the duration selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoDuration {
    HalfMinute,
    #[default]
    OneMinute,
    MinuteAndHalf,
    TwoMinutes,
}

impl VideoDuration {
    pub const ALL: [VideoDuration; 4] = [
        VideoDuration::HalfMinute,
        VideoDuration::OneMinute,
        VideoDuration::MinuteAndHalf,
        VideoDuration::TwoMinutes,
    ];

    pub fn seconds(self) -> u32 {
        match self {
            VideoDuration::HalfMinute => 30,
            VideoDuration::OneMinute => 60,
            VideoDuration::MinuteAndHalf => 90,
            VideoDuration::TwoMinutes => 120,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoDuration::HalfMinute => "30 sec",
            VideoDuration::OneMinute => "1 min",
            VideoDuration::MinuteAndHalf => "1.5 min",
            VideoDuration::TwoMinutes => "2 min",
        }
    }

    pub fn from_seconds(seconds: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.seconds() == seconds)
    }

    /// Parses the `value` attribute of a selector option.
    pub fn from_option_value(value: &str) -> Option<Self> {
        value.trim().parse().ok().and_then(Self::from_seconds)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GenerateVideoRequest {
    pub question: String,
    pub duration: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub scene_id: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// FastAPI error body. `detail` is a string for handled errors but a list of
/// objects for request validation failures, so it stays untyped here.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn detail_text(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .map(str::to_string)
    }
}

/// A finished video, with its URL already resolved against the service origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVideo {
    pub url: String,
    pub scene_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SceneCode {
    pub scene_id: String,
    pub code: String,
}
