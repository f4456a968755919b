use thiserror::Error;

const SERVICE_FALLBACK: &str = "Failed to generate video";
const TRANSPORT_FALLBACK: &str = "An error occurred while generating the video";

/// Everything that can end a generation attempt. The `Display` output is the
/// exact text shown in the error banner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Please enter a question")]
    EmptyQuestion,
    #[error("{0}")]
    Service(String),
    #[error("Video generation failed")]
    MalformedResponse,
    #[error("{0}")]
    Transport(String),
    #[error("Invalid service URL: {0}")]
    InvalidServiceUrl(#[from] url::ParseError),
}

impl GenerationError {
    /// Non-2xx answer; `detail` comes from the error body when it had one.
    pub fn service(detail: Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.trim().is_empty() => Self::Service(detail),
            _ => Self::Service(SERVICE_FALLBACK.to_string()),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            Self::Transport(message)
        }
    }
}

impl From<gloo_net::Error> for GenerationError {
    fn from(e: gloo_net::Error) -> Self {
        Self::transport(e.to_string())
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(e: serde_json::Error) -> Self {
        Self::transport(e.to_string())
    }
}
