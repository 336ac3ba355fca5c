pub mod cancellation;
pub mod progress;
pub mod render_image;
