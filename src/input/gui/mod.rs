//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window
//! management, pixels for framebuffer rendering, and egui for UI controls.

mod app;
mod selection;

pub use app::run_gui;
