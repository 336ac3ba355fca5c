use std::path::Path;
use std::sync::Arc;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::request::{ComputationRequest, FrameData, FrameSink, StageKind};
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::MandelbrotEvaluator;
use crate::core::palette::gradient::{BLACK, default_gradient};
use crate::core::palette::palette::Palette;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const ITERATION_BUDGET: u32 = 256;

#[derive(Default)]
struct CapturedFrame {
    frame: Option<FrameData>,
}

impl FrameSink for CapturedFrame {
    fn present(&mut self, frame: FrameData) {
        self.frame = Some(frame);
    }
}

/// Renders a single full-resolution view of the classic Mandelbrot region
/// through the computation pipeline and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    image: Option<ImageBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            image: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        // Classic whole-set view.
        let region = Region::new(-2.5, -1.0, 3.5, 2.0)?;

        println!("Rendering Mandelbrot set...");
        println!("Image size: {}x{}", WIDTH, HEIGHT);
        println!("Iteration budget: {}", ITERATION_BUDGET);

        let palette = Palette::build(&default_gradient(), ITERATION_BUDGET, BLACK);
        let evaluator = Arc::new(MandelbrotEvaluator::new(palette));
        let mut request = ComputationRequest::new(WIDTH, HEIGHT, region, evaluator)?;

        let mut captured = CapturedFrame::default();
        request.await_stage(StageKind::Full, &mut captured);

        let frame = captured
            .frame
            .expect("a full stage awaited without cancellation always delivers");

        println!("Duration:   {:?}", frame.render_duration);

        self.image = Some(frame.image);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(image) = &self.image {
            if let Some(parent) = filepath.as_ref().parent() {
                std::fs::create_dir_all(parent)?;
            }

            self.presenter.present(image, filepath)?;
        }

        Ok(())
    }
}
