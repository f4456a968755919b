use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use crate::config;
use serde::Serialize;

/// Thin client for the video-generation service; every path is resolved against
/// [`config::get_backend_url`].
pub struct Api;

/// Request wrapper that logs the round trip and buffers the response body.
pub struct RequestWrapper {
    request: Request,
    path: String,
    method: &'static str,
}

/// Status and body of a finished request, read in full so callers can decode
/// it however the status dictates.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl RequestWrapper {
    fn new(path: &str, method: &'static str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self {
            request,
            path: path.to_string(),
            method,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    /// Send the request once. No retries: a failed attempt is reported to the caller.
    pub async fn send(self) -> Result<RawResponse, GlooError> {
        gloo_console::log!(format!("{} {}", self.method, self.path));
        let response = self.request.send().await?;
        let raw = RawResponse {
            status: response.status(),
            body: response.text().await?,
        };
        if !raw.ok() {
            gloo_console::log!(format!("{} {} returned {}", self.method, self.path, raw.status));
        }
        Ok(raw)
    }
}

impl Api {
    /// Create a GET request against the backend URL
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    /// Create a POST request against the backend URL
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

#[cfg(test)]
mod tests {
    use super::RawResponse;

    #[test]
    fn only_2xx_counts_as_ok() {
        let response = |status| RawResponse { status, body: String::new() };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(304).ok());
        assert!(!response(422).ok());
        assert!(!response(500).ok());
    }
}
