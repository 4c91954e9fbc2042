// Application layer - Use cases and ports
pub mod dashboard_service;
pub mod dashboard_source;
pub mod streaming_service;
pub mod widget_renderer;
