use url::Url;

use super::error::GenerationError;
use super::models::{
    ErrorResponse, GenerateVideoRequest, GenerateVideoResponse, GeneratedVideo, HealthResponse,
    SceneCode,
};
use crate::config;
use crate::utils::api::{Api, RawResponse};

const SCENE_FALLBACK: &str = "Failed to load scene code";

/// Asks the service for a video. One request, no retries.
pub async fn generate_video(request: &GenerateVideoRequest) -> Result<GeneratedVideo, GenerationError> {
    let response = Api::post("/generate-video").json(request)?.send().await?;
    interpret_generation(&response, config::get_backend_url())
}

pub fn interpret_generation(
    response: &RawResponse,
    backend_url: &str,
) -> Result<GeneratedVideo, GenerationError> {
    if !response.ok() {
        return Err(GenerationError::service(error_detail(&response.body)));
    }

    let payload: GenerateVideoResponse =
        serde_json::from_str(&response.body).map_err(|_| GenerationError::MalformedResponse)?;
    if let Some(message) = &payload.message {
        log::info!("Generation finished: {}", message);
    }

    match payload.video_url.filter(|path| !path.trim().is_empty()) {
        Some(path) if payload.success => Ok(GeneratedVideo {
            url: resolve_video_url(backend_url, &path)?,
            scene_id: payload.scene_id,
        }),
        _ => Err(GenerationError::MalformedResponse),
    }
}

/// Puts a path returned by the service onto the service origin. Anything that
/// is not an origin-relative path (full or protocol-relative URLs) is refused.
pub fn resolve_video_url(backend_url: &str, path: &str) -> Result<String, GenerationError> {
    let base = Url::parse(backend_url)?;
    let mut rest = path.chars().skip(1);
    if !path.starts_with('/') || matches!(rest.next(), Some('/') | Some('\\')) {
        return Err(GenerationError::MalformedResponse);
    }
    let url = base.join(path)?;
    if url.origin() != base.origin() {
        return Err(GenerationError::MalformedResponse);
    }
    Ok(url.to_string())
}

/// String `detail` of an error body, if the body is JSON and carries one.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.detail_text())
}

pub async fn check_health() -> bool {
    match Api::get("/health").send().await {
        Ok(response) => interpret_health(&response),
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            false
        }
    }
}

pub fn interpret_health(response: &RawResponse) -> bool {
    response.ok()
        && serde_json::from_str::<HealthResponse>(&response.body)
            .map(|health| {
                log::info!("Service status: {} ({})", health.status, health.message);
                health.status == "healthy"
            })
            .unwrap_or(false)
}

pub async fn fetch_scene_code(scene_id: &str) -> Result<SceneCode, String> {
    if !is_valid_scene_id(scene_id) {
        return Err(SCENE_FALLBACK.to_string());
    }
    let response = Api::get(&format!("/scenes/{}", scene_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    interpret_scene(&response)
}

pub fn interpret_scene(response: &RawResponse) -> Result<SceneCode, String> {
    if !response.ok() {
        return Err(error_detail(&response.body).unwrap_or_else(|| SCENE_FALLBACK.to_string()));
    }
    serde_json::from_str(&response.body).map_err(|_| SCENE_FALLBACK.to_string())
}

fn is_valid_scene_id(scene_id: &str) -> bool {
    !scene_id.is_empty()
        && scene_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8000";

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn success_resolves_video_against_origin() {
        let video = interpret_generation(
            &response(200, r#"{"success":true,"message":"Video generated successfully","scene_id":"abc","video_url":"/videos/abc.mp4"}"#),
            ORIGIN,
        )
        .unwrap();
        assert_eq!(video.url, "http://localhost:8000/videos/abc.mp4");
        assert_eq!(video.scene_id.as_deref(), Some("abc"));
    }

    #[test]
    fn failure_detail_becomes_error_text() {
        let err = interpret_generation(&response(500, r#"{"detail":"quota exceeded"}"#), ORIGIN)
            .unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn failure_without_usable_detail_uses_fallback() {
        for body in ["", "<html>Bad Gateway</html>", r#"{"detail":[{"msg":"field required"}]}"#] {
            let err = interpret_generation(&response(502, body), ORIGIN).unwrap_err();
            assert_eq!(err.to_string(), "Failed to generate video");
        }
    }

    #[test]
    fn success_without_video_url_is_a_failure() {
        let err = interpret_generation(&response(200, r#"{"success":true}"#), ORIGIN).unwrap_err();
        assert_eq!(err, GenerationError::MalformedResponse);
        assert_eq!(err.to_string(), "Video generation failed");
    }

    #[test]
    fn unsuccessful_or_unreadable_payload_is_a_failure() {
        let cases = [
            r#"{"success":false,"video_url":"/videos/abc.mp4"}"#,
            r#"{"success":true,"video_url":""}"#,
            "not json",
        ];
        for body in cases {
            assert_eq!(
                interpret_generation(&response(200, body), ORIGIN).unwrap_err(),
                GenerationError::MalformedResponse
            );
        }
    }

    #[test]
    fn video_path_joins_on_origin_only() {
        assert_eq!(
            resolve_video_url("https://api.piyx.ai/v1", "/videos/x.mp4").unwrap(),
            "https://api.piyx.ai/videos/x.mp4"
        );
        assert_eq!(
            resolve_video_url(ORIGIN, "/videos/abc.mp4?v=2").unwrap(),
            "http://localhost:8000/videos/abc.mp4?v=2"
        );
        assert!(matches!(
            resolve_video_url("not a url", "/videos/x.mp4"),
            Err(GenerationError::InvalidServiceUrl(_))
        ));
    }

    #[test]
    fn video_paths_cannot_leave_the_service_origin() {
        for path in [
            "//evil.example/x.mp4",
            "/\\evil.example/x.mp4",
            "http://cdn.other/x.mp4",
            "https://localhost:8000/videos/x.mp4",
            "videos/x.mp4",
        ] {
            assert_eq!(
                resolve_video_url(ORIGIN, path),
                Err(GenerationError::MalformedResponse),
                "{}",
                path
            );
        }
    }

    #[test]
    fn protocol_relative_video_url_fails_generation() {
        let err = interpret_generation(
            &response(200, r#"{"success":true,"video_url":"//evil.example/x.mp4"}"#),
            ORIGIN,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Video generation failed");
    }

    #[test]
    fn health_requires_healthy_status() {
        assert!(interpret_health(&response(200, r#"{"status":"healthy","message":"All systems operational"}"#)));
        assert!(!interpret_health(&response(200, r#"{"status":"degraded","message":""}"#)));
        assert!(!interpret_health(&response(503, r#"{"status":"healthy","message":""}"#)));
        assert!(!interpret_health(&response(200, "oops")));
    }

    #[test]
    fn scene_code_errors_prefer_detail() {
        assert_eq!(
            interpret_scene(&response(404, r#"{"detail":"Scene not found"}"#)).unwrap_err(),
            "Scene not found"
        );
        assert_eq!(interpret_scene(&response(500, "")).unwrap_err(), "Failed to load scene code");
        let scene = interpret_scene(&response(200, r#"{"scene_id":"abc","code":"from manim import *"}"#)).unwrap();
        assert_eq!(scene.code, "from manim import *");
    }

    #[test]
    fn scene_ids_are_restricted_to_path_safe_characters() {
        assert!(is_valid_scene_id("3f2a-91_bc"));
        assert!(!is_valid_scene_id(""));
        assert!(!is_valid_scene_id("../secrets"));
    }
}
