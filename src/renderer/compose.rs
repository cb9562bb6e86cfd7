//! Window composition.
//!
//! # Algorithm
//!
//! 1. Seed a grid of the screen's size with the screen fill character
//! 2. For each window, bottom to top:
//!    - Reject a negative origin ([`Error::UnsupportedPlacement`])
//!    - Clip the window's declared size against the screen
//!    - For each visible row: take the stored line (or nothing), truncate or
//!      right-pad it with the window fill to the visible width, and overwrite
//!      that span of the grid row
//!    - Check the grid still has its shape
//! 3. Serialize: each row followed by a line break
//!
//! Later windows overwrite earlier ones cell by cell, so attachment order is
//! stacking order.

use tracing::{error, trace};

use super::buffer::Grid;
use crate::error::{Error, Result};
use crate::screen::Screen;
use crate::types::ClipRect;
use crate::window::Window;

/// Compose `windows` (back to front) onto a fresh grid for `screen`.
pub fn compose<'a, I>(screen: &Screen, windows: I) -> Result<Grid>
where
    I: IntoIterator<Item = &'a Window>,
{
    let mut grid = screen.blank_grid();
    for window in windows {
        draw_window(&mut grid, window)?;
    }
    Ok(grid)
}

/// Compose and serialize in one step.
pub fn render<'a, I>(screen: &Screen, windows: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Window>,
{
    compose(screen, windows).map(|grid| grid.to_frame())
}

/// Draw one window on top of `grid`.
pub fn draw_window(grid: &mut Grid, window: &Window) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    check_shape(grid, width, height)?;

    let origin = window.origin();
    if origin.is_negative() {
        return Err(Error::UnsupportedPlacement {
            x: origin.x,
            y: origin.y,
        });
    }

    let Some(visible) = ClipRect::visible(origin, window.width(), window.height(), width, height)
    else {
        trace!(x = origin.x, y = origin.y, "window outside screen, skipped");
        return Ok(());
    };
    trace!(?visible, "drawing window");

    let shown_width = visible.width as usize;
    let mut span = Vec::with_capacity(shown_width);
    for row in 0..visible.height {
        let line = window
            .lines()
            .get(row as usize)
            .map(String::as_str)
            .unwrap_or_default();

        span.clear();
        span.extend(line.chars().take(shown_width));
        span.resize(shown_width, window.fill());

        grid.write_span(visible.x, visible.y + row, &span)?;
    }

    check_shape(grid, width, height)
}

fn check_shape(grid: &Grid, width: u16, height: u16) -> Result<()> {
    grid.check_shape(width, height).inspect_err(|err| {
        error!(%err, "grid shape broken while composing");
    })
}

// =============================================================================
// Tests
// =============================================================================
