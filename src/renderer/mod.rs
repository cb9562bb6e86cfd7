//! Renderer - grid composition and frame output.
//!
//! The renderer knows only about screens, windows and characters. It takes
//! the windows of a screen in stacking order, paints them onto a [`Grid`],
//! and hands the serialized frame to a [`FrameSink`].

pub mod buffer;
pub mod compose;
pub mod output;

// Re-exports for convenience
pub use buffer::Grid;
pub use compose::{compose, draw_window, render};
pub use output::{FrameSink, OutputBuffer, TerminalSink};
