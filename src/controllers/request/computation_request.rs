use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::request::data::frame_data::FrameData;
use crate::controllers::request::ports::frame_sink::FrameSink;
use crate::controllers::request::stage::{Stage, StageKind};
use crate::core::actions::cancellation::CancelFlag;
use crate::core::actions::progress::ProgressSlot;
use crate::core::actions::render_image::ports::point_evaluator::PointEvaluator;
use crate::core::actions::render_image::render_image::render_image;
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::region::Region;

/// Edge length of the fixed square preview pass.
pub const PREVIEW_SIZE: u32 = 256;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComputationRequestError {
    InvalidTargetSize { width: u32, height: u32 },
}

impl fmt::Display for ComputationRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTargetSize { width, height } => {
                write!(f, "target size must be at least 2x2: {}x{}", width, height)
            }
        }
    }
}

impl Error for ComputationRequestError {}

struct CompletedStage {
    image: ImageBuffer,
    render_duration: Duration,
}

/// The escalating computation state machine.
///
/// A submission spawns a low-resolution preview worker; consuming the
/// preview result automatically escalates to a full-resolution pass over
/// the same region. A newer submission cancels whatever is outstanding and
/// restarts from the preview stage. The consumer drives delivery through
/// the non-blocking [`poll`] (once per rendered frame) or the blocking
/// [`await_stage`] (startup paths only).
///
/// Owned exclusively by one consumer; the cancel flag and progress slot are
/// recreated per submission, the result channel per stage, so at most one
/// worker is ever observable through this request.
///
/// [`poll`]: ComputationRequest::poll
/// [`await_stage`]: ComputationRequest::await_stage
pub struct ComputationRequest {
    width: u32,
    height: u32,
    region: Region,
    evaluator: Arc<dyn PointEvaluator>,
    stage: Stage,
    cancel: CancelFlag,
    progress: ProgressSlot,
    result: Option<Receiver<CompletedStage>>,
}

impl ComputationRequest {
    pub fn new(
        width: u32,
        height: u32,
        region: Region,
        evaluator: Arc<dyn PointEvaluator>,
    ) -> Result<Self, ComputationRequestError> {
        if width < 2 || height < 2 {
            return Err(ComputationRequestError::InvalidTargetSize { width, height });
        }

        Ok(Self {
            width,
            height,
            region,
            evaluator,
            stage: Stage::Idle,
            cancel: CancelFlag::new(),
            progress: ProgressSlot::new(),
            result: None,
        })
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn target_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Updates the full-resolution target used by subsequent stages.
    ///
    /// An in-flight stage keeps the dimensions it was spawned with.
    /// Degenerate sizes (minimised windows) are ignored.
    pub fn set_target_size(&mut self, width: u32, height: u32) {
        if width < 2 || height < 2 {
            return;
        }

        self.width = width;
        self.height = height;
    }

    /// Accepts a new region of interest, superseding any outstanding work.
    ///
    /// Always restarts the sequence at the preview stage with a fresh
    /// cancel flag and progress slot.
    pub fn submit(&mut self, region: Region) {
        self.cancel_current();

        self.region = region;
        self.cancel = CancelFlag::new();
        self.progress = ProgressSlot::new();
        self.spawn_stage(PREVIEW_SIZE, PREVIEW_SIZE);
        self.stage = Stage::PreviewPending;

        info!(
            "submitted region ({}, {}) {}x{}, preview {}x{}",
            region.x(),
            region.y(),
            region.width(),
            region.height(),
            PREVIEW_SIZE,
            PREVIEW_SIZE,
        );
    }

    /// Retires any outstanding worker and returns to `Idle`.
    ///
    /// Signals cancellation and discards pending progress and results; the
    /// worker observes the flag at its next row boundary and exits on its
    /// own. No-op when already idle.
    pub fn cancel_current(&mut self) {
        if self.stage == Stage::Idle {
            return;
        }

        self.cancel.cancel();
        self.result = None;
        self.progress.clear();
        self.stage = Stage::Idle;
    }

    /// Non-blocking per-frame check.
    ///
    /// Returns the latest progress percentage published since the previous
    /// poll, `Some(0)` when a stage result was consumed this call, or
    /// `None` when idle or when nothing new arrived. Consuming a preview
    /// result escalates to the full pass; consuming a full result returns
    /// the request to `Idle`.
    pub fn poll(&mut self, sink: &mut dyn FrameSink) -> Option<u8> {
        if self.stage == Stage::Idle {
            return None;
        }

        let progress = self.progress.take();

        let Some(completed) = self.result.as_ref().and_then(|r| r.try_recv().ok()) else {
            return progress;
        };

        match self.stage {
            Stage::PreviewPending => {
                self.deliver(StageKind::Preview, completed, sink);
                self.escalate();
            }
            Stage::FullPending => {
                self.deliver(StageKind::Full, completed, sink);
                self.result = None;
                self.stage = Stage::Idle;
            }
            Stage::Idle => {}
        }

        Some(0)
    }

    /// Blocks until the targeted stage delivers.
    ///
    /// `Preview` waits for the outstanding preview result, delivers it and
    /// escalates (no-op unless a preview is pending). `Full` discards any
    /// outstanding work, runs a fresh full-resolution pass to completion,
    /// delivers it and returns to `Idle`. Intended for startup and
    /// headless paths that intentionally pause interaction.
    pub fn await_stage(&mut self, target: StageKind, sink: &mut dyn FrameSink) {
        match target {
            StageKind::Preview => {
                if self.stage != Stage::PreviewPending {
                    return;
                }

                let Some(receiver) = self.result.take() else {
                    self.stage = Stage::Idle;
                    return;
                };

                match receiver.recv() {
                    Ok(completed) => {
                        self.deliver(StageKind::Preview, completed, sink);
                        self.escalate();
                    }
                    Err(_) => {
                        // The worker exited without delivering; treat as a
                        // dropped stage rather than a fault.
                        self.stage = Stage::Idle;
                    }
                }
            }
            StageKind::Full => {
                self.cancel_current();
                self.cancel = CancelFlag::new();
                self.progress = ProgressSlot::new();
                self.escalate();

                let Some(receiver) = self.result.take() else {
                    self.stage = Stage::Idle;
                    return;
                };

                if let Ok(completed) = receiver.recv() {
                    self.deliver(StageKind::Full, completed, sink);
                }

                self.result = None;
                self.stage = Stage::Idle;
            }
        }
    }

    /// Spawns the full-resolution pass for the stored region.
    fn escalate(&mut self) {
        self.spawn_stage(self.width, self.height);
        self.stage = Stage::FullPending;
    }

    fn spawn_stage(&mut self, width: u32, height: u32) {
        let (sender, receiver) = mpsc::channel();
        let evaluator = Arc::clone(&self.evaluator);
        let cancel = self.cancel.clone();
        let progress = self.progress.clone();
        let region = self.region;

        thread::spawn(move || {
            let started = Instant::now();

            match render_image(width, height, region, evaluator.as_ref(), &cancel, &progress) {
                Ok(image) => {
                    // The receiver may already be gone when a newer
                    // submission superseded this stage; the send failure
                    // drops the buffer.
                    let _ = sender.send(CompletedStage {
                        image,
                        render_duration: started.elapsed(),
                    });
                }
                Err(cancelled) => {
                    debug!("{}x{} worker exited: {}", width, height, cancelled);
                }
            }
        });

        self.result = Some(receiver);
    }

    fn deliver(&self, kind: StageKind, completed: CompletedStage, sink: &mut dyn FrameSink) {
        info!(
            "{} stage {}x{} completed in {:?}",
            kind.display_name(),
            completed.image.width(),
            completed.image.height(),
            completed.render_duration,
        );

        sink.present(FrameData {
            stage: kind,
            image: completed.image,
            render_duration: completed.render_duration,
        });
    }
}

impl Drop for ComputationRequest {
    fn drop(&mut self) {
        self.cancel_current();
    }
}
