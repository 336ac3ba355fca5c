use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::progress::ProgressSlot;
use crate::core::actions::render_image::ports::point_evaluator::PointEvaluator;
use crate::core::data::complex::Complex;
use crate::core::data::image_buffer::{BYTES_PER_PIXEL, ImageBuffer};
use crate::core::data::region::Region;

/// Progress after finishing `row`, as a percentage of all rows.
fn row_progress(row: u32, height: u32) -> u8 {
    if height < 2 {
        return 100;
    }

    let percent = (row as f64 / (height - 1) as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Computes a full RGBA image of `region` by evaluating every pixel.
///
/// Rows are produced top to bottom; pixels within a row are evaluated in
/// parallel on rayon's pool. Pixel `(x, y)` samples the plane at
/// `(x * region.width / width + region.x, y * region.height / height +
/// region.y)`, so pixel `(0, 0)` lands exactly on the region's top-left
/// corner.
///
/// After each completed row the cancel token is checked — cancellation
/// drops all work done so far and returns [`Cancelled`] without delivering
/// a partial buffer — and the row's progress percentage is published to the
/// slot (best effort, overwriting any unconsumed value).
pub fn render_image<E, C>(
    width: u32,
    height: u32,
    region: Region,
    evaluator: &E,
    cancel: &C,
    progress: &ProgressSlot,
) -> Result<ImageBuffer, Cancelled>
where
    E: PointEvaluator + ?Sized,
    C: CancelToken,
{
    let mut image = ImageBuffer::new(width, height);
    let step_x = region.width() / width as f64;
    let step_y = region.height() / height as f64;

    for y in 0..height {
        let imag = y as f64 * step_y + region.y();

        image
            .row_mut(y)
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .enumerate()
            .for_each(|(x, pixel)| {
                let c = Complex {
                    real: x as f64 * step_x + region.x(),
                    imag,
                };
                let colour = evaluator.evaluate(c);

                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
                pixel[3] = colour.a;
            });

        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        progress.publish(row_progress(y, height));
    }

    Ok(image)
}
