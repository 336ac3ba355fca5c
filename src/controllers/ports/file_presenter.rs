use std::path::Path;

use crate::core::data::image_buffer::ImageBuffer;

pub trait FilePresenterPort {
    fn present(&self, image: &ImageBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
