use crate::controllers::request::data::frame_data::FrameData;

/// Output port for delivered frames.
///
/// Called from the consumer's own thread during [`poll`] or
/// [`await_stage`], never from a worker.
///
/// [`poll`]: crate::controllers::request::computation_request::ComputationRequest::poll
/// [`await_stage`]: crate::controllers::request::computation_request::ComputationRequest::await_stage
pub trait FrameSink {
    fn present(&mut self, frame: FrameData);
}
