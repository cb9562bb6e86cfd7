//! Screen - the fixed-size output grid windows are composed onto.
//!
//! Like [`Window`](crate::Window), a screen is a plain value. The list of
//! windows attached to it lives in the [`Compositor`](crate::Compositor),
//! so a cloned screen starts with no windows.

use crate::error::Result;
use crate::renderer::Grid;
use crate::types::{
    checked_size, CLEAR_LINES, DEFAULT_SCREEN_FILL, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
};

/// Size and fill character of an output frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    fill: char,
}

impl Screen {
    /// Create a screen. Fails with
    /// [`Error::InvalidDimensions`](crate::Error::InvalidDimensions) on a
    /// negative size or one above `u16::MAX`.
    ///
    /// Construction allocates nothing, but every render builds a grid of
    /// `width * height` four-byte cells plus the frame text. Near the upper
    /// bound that is tens of gigabytes (65535 x 65535 is about 17 GB for
    /// the grid alone), so sizes that large are accepted but not renderable
    /// in practice.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let (width, height) = checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            fill: DEFAULT_SCREEN_FILL,
        })
    }

    /// Set the character used for cells no window covers.
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn fill(&self) -> char {
        self.fill
    }

    /// A grid of this screen's size with every cell set to the fill character.
    pub fn blank_grid(&self) -> Grid {
        Grid::filled(self.width, self.height, self.fill)
    }

    /// A blank frame that scrolls the previous output out of view.
    ///
    /// Always [`CLEAR_LINES`] line breaks, whatever the screen size.
    pub fn clear(&self) -> String {
        "\n".repeat(CLEAR_LINES)
    }
}

impl Default for Screen {
    /// A 30x30 screen.
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            fill: DEFAULT_SCREEN_FILL,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
