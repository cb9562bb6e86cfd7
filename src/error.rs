//! Error type for the compositor.
//!
//! Every failure is synchronous and reported to the caller of the operation
//! that detected it. Operations validate before mutating, so a returned error
//! means the compositor state is exactly what it was before the call.

use std::io;
use std::str::Utf8Error;

use crate::engine::{ScreenId, WindowId};

/// Errors produced by screens, windows and the compositor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A screen or window was constructed with a negative (or unrepresentable) size.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// The window is already attached to this screen or to another one.
    #[error("window {window:?} is already attached to screen {screen:?}")]
    AlreadyAttached { window: WindowId, screen: ScreenId },

    /// The window is not in the screen's collection.
    #[error("window {window:?} is not attached to screen {screen:?}")]
    NotAttached { window: WindowId, screen: ScreenId },

    /// Line index outside the stored content.
    #[error("line {index} out of range (window has {len} lines)")]
    OutOfRange { index: i64, len: usize },

    /// Negative window origin found while rendering.
    #[error("negative window origin ({x}, {y}) is not supported")]
    UnsupportedPlacement { x: i32, y: i32 },

    /// The working grid lost its shape. Always a bug in the compositor.
    #[error("compositor invariant violated: {0}")]
    CompositorInvariantViolation(String),

    /// Window text could not be split into lines.
    #[error("could not parse window content: {0}")]
    ContentParseError(#[from] Utf8Error),

    /// Handle to a screen that was removed or never existed.
    #[error("unknown screen {0:?}")]
    UnknownScreen(ScreenId),

    /// Handle to a window that was removed or never existed.
    #[error("unknown window {0:?}")]
    UnknownWindow(WindowId),

    /// The output sink failed while writing a frame.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidDimensions { width: -1, height: 3 };
        assert_eq!(err.to_string(), "invalid dimensions -1x3");

        let err = Error::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "line 4 out of range (window has 2 lines)");

        let err = Error::UnsupportedPlacement { x: -2, y: 0 };
        assert_eq!(
            err.to_string(),
            "negative window origin (-2, 0) is not supported"
        );
    }

    #[test]
    fn test_utf8_error_converts() {
        let bytes = vec![0x66u8, 0xff];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::ContentParseError(_)));
    }
}
