//! # ascii-compositor
//!
//! Character-grid compositor for plain-text terminal output.
//!
//! A [`Screen`] is a fixed-size grid of characters. [`Window`]s are
//! rectangles of text placed on it. The [`Compositor`] owns both, keeps
//! track of which windows are attached to which screen, and renders a screen
//! by painting its windows back to front:
//!
//! ```text
//! Screen + [Window, Window, ...] → Grid → "row\nrow\n..." → FrameSink
//! ```
//!
//! Windows larger than the space left on the screen are clipped, short lines
//! are padded with the window's fill character, and windows attached later
//! cover earlier ones.
//!
//! ## Example
//!
//! ```
//! use ascii_compositor::{Compositor, Coord, Screen, Window};
//!
//! let mut compositor = Compositor::new();
//! let screen = compositor.add_screen(Screen::new(5, 3)?);
//!
//! let mut window = Window::new(Coord::new(1, 1), 3, 1)?;
//! window.set_text("ABC")?;
//! let window = compositor.add_window(window);
//!
//! compositor.attach(screen, window)?;
//! assert_eq!(compositor.render(screen)?, "     \n ABC \n     \n");
//! # Ok::<(), ascii_compositor::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Coordinates, clip rects, defaults
//! - [`window`] - Window content and placement
//! - [`screen`] - Screen size and fill
//! - [`engine`] - Compositor, handles, attach/detach
//! - [`renderer`] - Grid composition and output sinks

pub mod engine;
pub mod error;
pub mod renderer;
pub mod screen;
pub mod types;
pub mod window;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use types::*;

pub use engine::{Compositor, ScreenId, WindowId};
pub use error::{Error, Result};
pub use renderer::{FrameSink, Grid, OutputBuffer, TerminalSink};
pub use screen::Screen;
pub use window::Window;
