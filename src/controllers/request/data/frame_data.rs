use crate::controllers::request::stage::StageKind;
use crate::core::data::image_buffer::ImageBuffer;
use std::time::Duration;

/// A completed computation pass handed to the consumer.
///
/// Each frame is a one-shot full replacement of the previously displayed
/// image; the buffer carries its own resolution.
#[derive(Debug)]
pub struct FrameData {
    pub stage: StageKind,
    pub image: ImageBuffer,
    pub render_duration: Duration,
}
