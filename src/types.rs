//! Core types for the compositor.
//!
//! Placement primitives and the default constants every screen and window
//! starts from.

// =============================================================================
// Defaults
// =============================================================================

/// Fill character for cells no window covers.
pub const DEFAULT_SCREEN_FILL: char = ' ';

/// Fill character for default window content and for right padding.
pub const DEFAULT_WINDOW_FILL: char = ' ';

pub const DEFAULT_SCREEN_WIDTH: u16 = 30;
pub const DEFAULT_SCREEN_HEIGHT: u16 = 30;

pub const DEFAULT_WINDOW_WIDTH: u16 = 20;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 20;

/// Number of line breaks emitted by [`Screen::clear`](crate::Screen::clear).
///
/// Independent of screen size: it only needs to push the previous frame
/// out of view before the next one is printed.
pub const CLEAR_LINES: usize = 100;

/// Validate a requested size. Negative or larger than `u16::MAX` is rejected.
pub(crate) fn checked_size(width: i32, height: i32) -> crate::Result<(u16, u16)> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(crate::Error::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        }),
    }
}

// =============================================================================
// Coord
// =============================================================================

/// Top-left corner of a window in screen cells. (0, 0) is the top-left cell.
///
/// Negative values are representable but rejected when a screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if either component is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// =============================================================================
// ClipRect - Visible region of a window
// =============================================================================

/// A rectangle in screen cells.
///
/// The compositor uses it for the visible region of a window: the part of
/// the window's declared size that lands inside the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    /// Create a new clip rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Clip a window placed at `origin` with the given size against a
    /// `bounds_width` x `bounds_height` area anchored at (0, 0).
    ///
    /// Visible extent per axis is `min(bound - offset, size)`. Returns `None`
    /// when that is zero or negative on either axis. The origin must already
    /// be known to be non-negative.
    pub fn visible(
        origin: Coord,
        width: u16,
        height: u16,
        bounds_width: u16,
        bounds_height: u16,
    ) -> Option<ClipRect> {
        let shown_width = (bounds_width as i64 - origin.x as i64).min(width as i64);
        let shown_height = (bounds_height as i64 - origin.y as i64).min(height as i64);

        if shown_width <= 0 || shown_height <= 0 {
            return None;
        }

        // Both offsets are below the bounds here, so they fit in u16.
        Some(ClipRect {
            x: origin.x as u16,
            y: origin.y as u16,
            width: shown_width as u16,
            height: shown_height as u16,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_size() {
        assert_eq!(checked_size(0, 0).unwrap(), (0, 0));
        assert_eq!(checked_size(80, 24).unwrap(), (80, 24));
        assert!(checked_size(-1, 5).is_err());
        assert!(checked_size(5, -1).is_err());
        assert!(checked_size(70_000, 1).is_err());
    }

    #[test]
    fn test_coord_negative() {
        assert!(!Coord::new(0, 0).is_negative());
        assert!(Coord::new(-1, 0).is_negative());
        assert!(Coord::new(3, -7).is_negative());
        assert_eq!(Coord::from((4, 5)), Coord::new(4, 5));
    }

    #[test]
    fn test_visible_fully_inside() {
        let rect = ClipRect::visible(Coord::new(1, 1), 3, 1, 5, 3).unwrap();
        assert_eq!(rect, ClipRect::new(1, 1, 3, 1));
    }

    #[test]
    fn test_visible_clipped_right_and_bottom() {
        let rect = ClipRect::visible(Coord::new(3, 2), 4, 4, 5, 3).unwrap();
        assert_eq!(rect, ClipRect::new(3, 2, 2, 1));
    }

    #[test]
    fn test_visible_outside_bounds() {
        assert_eq!(ClipRect::visible(Coord::new(5, 0), 4, 1, 5, 3), None);
        assert_eq!(ClipRect::visible(Coord::new(0, 9), 4, 1, 5, 3), None);
        assert_eq!(ClipRect::visible(Coord::new(i32::MAX, 0), 4, 1, 5, 3), None);
    }

    #[test]
    fn test_visible_zero_sized_window() {
        assert_eq!(ClipRect::visible(Coord::new(0, 0), 0, 3, 5, 3), None);
        assert_eq!(ClipRect::visible(Coord::new(0, 0), 3, 0, 5, 3), None);
    }
}
