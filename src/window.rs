//! Window - a rectangular region of text placed on a screen.
//!
//! A window owns its content (rows of text, top to bottom) and its placement.
//! It knows nothing about screens: whether a window is attached, and where,
//! is tracked by the [`Compositor`](crate::Compositor). Cloning a window
//! therefore always yields a detached copy.
//!
//! Content does not have to match the declared size. Lines may be shorter
//! or longer than `width` and there may be fewer or more lines than
//! `height`; the compositor pads and truncates when it draws.

use crate::error::{Error, Result};
use crate::types::{
    checked_size, Coord, DEFAULT_WINDOW_FILL, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

/// A text window with fixed size and movable origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    origin: Coord,
    width: u16,
    height: u16,
    fill: char,
    lines: Vec<String>,
    /// Content is still the generated fill block, not caller-provided.
    default_content: bool,
}

impl Window {
    /// Create a window at `origin` with the given size.
    ///
    /// Content starts as `height` lines of `width` fill characters.
    /// Fails with [`Error::InvalidDimensions`] on a negative size.
    pub fn new(origin: impl Into<Coord>, width: i32, height: i32) -> Result<Self> {
        let (width, height) = checked_size(width, height)?;
        Ok(Self::sized(origin.into(), width, height))
    }

    fn sized(origin: Coord, width: u16, height: u16) -> Self {
        let mut window = Self {
            origin,
            width,
            height,
            fill: DEFAULT_WINDOW_FILL,
            lines: Vec::new(),
            default_content: true,
        };
        window.lines = window.default_content();
        window
    }

    /// Set the fill character.
    ///
    /// Used for right padding when composing. Default content created by
    /// [`Window::new`] is refilled so it matches; content set through
    /// [`set_content`](Self::set_content) or [`set_text`](Self::set_text)
    /// is left alone.
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        if self.default_content {
            self.lines = self.default_content();
        }
        self
    }

    fn default_content(&self) -> Vec<String> {
        let row: String = std::iter::repeat_n(self.fill, self.width as usize).collect();
        vec![row; self.height as usize]
    }

    // =========================================================================
    // Placement
    // =========================================================================

    #[inline]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Move the window. Size stays fixed for the lifetime of the window.
    pub fn set_origin(&mut self, origin: impl Into<Coord>) {
        self.origin = origin.into();
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

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the content with the given lines, top to bottom.
    pub fn set_content<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self.default_content = false;
    }

    /// Replace the content with `text` split at `'\n'`.
    ///
    /// Empty lines are kept. A final `'\n'` ends the last line rather than
    /// starting a new empty one, so `"a\nb\n"` is two lines. Text that is not
    /// UTF-8 fails with [`Error::ContentParseError`] and leaves the current
    /// content untouched.
    pub fn set_text(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        let text = std::str::from_utf8(text.as_ref())?;
        self.lines = text.split_terminator('\n').map(str::to_owned).collect();
        self.default_content = false;
        Ok(())
    }

    /// The `index`-th stored line.
    ///
    /// Fails with [`Error::OutOfRange`] when `index` is negative or not below
    /// [`line_count`](Self::line_count). Rows past the stored content are
    /// not an error when composing; they are drawn as padding.
    pub fn line(&self, index: i64) -> Result<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
            .ok_or(Error::OutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for Window {
    /// A 20x20 window at (0, 0).
    fn default() -> Self {
        Self::sized(Coord::default(), DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_default_content() {
        let window = Window::new((2, 3), 4, 2).unwrap();
        assert_eq!(window.origin(), Coord::new(2, 3));
        assert_eq!(window.width(), 4);
        assert_eq!(window.height(), 2);
        assert_eq!(window.lines(), ["    ", "    "]);
    }

    #[test]
    fn test_new_rejects_negative_size() {
        assert!(matches!(
            Window::new((0, 0), -1, 2),
            Err(Error::InvalidDimensions { width: -1, height: 2 })
        ));
        assert!(Window::new((0, 0), 2, -5).is_err());
    }

    #[test]
    fn test_zero_sized_window() {
        let window = Window::new((0, 0), 0, 0).unwrap();
        assert_eq!(window.line_count(), 0);
    }

    #[test]
    fn test_default_window() {
        let window = Window::default();
        assert_eq!(window.origin(), Coord::new(0, 0));
        assert_eq!((window.width(), window.height()), (20, 20));
        assert_eq!(window.line_count(), 20);
        assert_eq!(window.line(0).unwrap().len(), 20);
    }

    #[test]
    fn test_with_fill_refills_default_content() {
        let window = Window::new((0, 0), 3, 1).unwrap().with_fill('.');
        assert_eq!(window.fill(), '.');
        assert_eq!(window.lines(), ["..."]);
    }

    #[test]
    fn test_with_fill_keeps_custom_content() {
        let mut window = Window::new((0, 0), 3, 1).unwrap();
        window.set_content(["ab"]);
        let window = window.with_fill('#');
        assert_eq!(window.lines(), ["ab"]);
    }

    #[test]
    fn test_with_fill_keeps_content_matching_old_fill() {
        let mut window = Window::new((0, 0), 3, 1).unwrap();
        window.set_content(["   "]);
        let window = window.with_fill('#');
        assert_eq!(window.lines(), ["   "]);

        let mut window = Window::new((0, 0), 2, 2).unwrap();
        window.set_text("  \n  \n").unwrap();
        let window = window.with_fill('*');
        assert_eq!(window.lines(), ["  ", "  "]);
    }

    #[test]
    fn test_set_content_replaces_wholesale() {
        let mut window = Window::new((0, 0), 10, 5).unwrap();
        window.set_content(vec!["overwritten", "by string"]);
        assert_eq!(window.line_count(), 2);
        window.set_content(["only"]);
        assert_eq!(window.lines(), ["only"]);
    }

    #[test]
    fn test_set_text_splits_lines() {
        let mut window = Window::default();
        window.set_text("one\n\nthree\n").unwrap();
        assert_eq!(window.lines(), ["one", "", "three"]);

        window.set_text("a\n\n").unwrap();
        assert_eq!(window.lines(), ["a", ""]);

        window.set_text("no newline").unwrap();
        assert_eq!(window.lines(), ["no newline"]);

        window.set_text("").unwrap();
        assert_eq!(window.line_count(), 0);
    }

    #[test]
    fn test_set_text_invalid_utf8_keeps_content() {
        let mut window = Window::default();
        window.set_text("keep").unwrap();

        let result = window.set_text(vec![b'o', b'k', 0xc3, b'\n']);
        assert!(matches!(result, Err(Error::ContentParseError(_))));
        assert_eq!(window.lines(), ["keep"]);
    }

    #[test]
    fn test_line_bounds() {
        let mut window = Window::default();
        window.set_content(["first", "second"]);

        assert_eq!(window.line(0).unwrap(), "first");
        assert_eq!(window.line(1).unwrap(), "second");
        assert!(matches!(
            window.line(2),
            Err(Error::OutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            window.line(-1),
            Err(Error::OutOfRange { index: -1, len: 2 })
        ));
    }

    #[test]
    fn test_set_origin() {
        let mut window = Window::default();
        window.set_origin(Coord::new(7, 1));
        assert_eq!(window.origin(), Coord::new(7, 1));
        assert_eq!(window.width(), 20);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut window = Window::new((1, 1), 3, 1).unwrap();
        window.set_content(["ABC"]);
        let mut copy = window.clone();
        copy.set_content(["XYZ"]);
        assert_eq!(window.line(0).unwrap(), "ABC");
        assert_eq!(copy.line(0).unwrap(), "XYZ");
    }
}
