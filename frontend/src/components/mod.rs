pub mod scene_source;
pub mod service_status;
pub mod video_generator;
