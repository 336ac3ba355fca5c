use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::image_buffer::{BYTES_PER_PIXEL, ImageBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, image: &ImageBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        // PPM header: P6 means binary RGB, then width, height and
        // max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", image.width(), image.height())?;
        writeln!(writer, "255")?;

        // PPM carries no alpha channel; drop the fourth byte of each
        // pixel.
        for pixel in image.data().chunks_exact(BYTES_PER_PIXEL) {
            writer.write_all(&pixel[..3])?;
        }

        writer.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
