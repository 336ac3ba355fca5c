mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::snapshot::SnapshotController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::request::{
    ComputationRequest, ComputationRequestError, FrameData, FrameSink, PREVIEW_SIZE, Stage,
    StageKind,
};
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::progress::ProgressSlot;
pub use crate::core::actions::render_image::ports::point_evaluator::PointEvaluator;
pub use crate::core::actions::render_image::render_image::render_image;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::image_buffer::{ImageBuffer, ImageBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::fractals::mandelbrot::MandelbrotEvaluator;
pub use crate::core::palette::gradient::{BLACK, GradientStop, default_gradient};
pub use crate::core::palette::palette::Palette;
pub use crate::core::util::selection::region_from_selection;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
