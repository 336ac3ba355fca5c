//! The escalating computation request.
//!
//! A submission runs a fixed-size preview pass on a background worker,
//! then automatically escalates to a full-resolution pass once the preview
//! is consumed. The consumer drives delivery by polling once per rendered
//! frame; blocking waits exist for startup paths only.

pub mod computation_request;
pub mod data;
pub mod ports;
pub mod stage;

pub use computation_request::{ComputationRequest, ComputationRequestError, PREVIEW_SIZE};
pub use data::frame_data::FrameData;
pub use ports::frame_sink::FrameSink;
pub use stage::{Stage, StageKind};
