//! Compositor - owner of screens and windows and of the links between them.
//!
//! Screens and windows are stored in registries and addressed by
//! [`ScreenId`] / [`WindowId`]. Attachment is recorded on both sides:
//! - each screen keeps its windows in stacking order (bottom first)
//! - each window remembers the one screen it is attached to, if any
//!
//! Only [`Compositor::attach`] and [`Compositor::detach`] touch those links,
//! and both validate everything before changing either side, so the two
//! always agree. Removing a window detaches it first; removing a screen
//! detaches all of its windows.
//!
//! All mutation goes through `&mut Compositor`. To share one between
//! threads, put it behind a `Mutex`.

use tracing::{debug, error};

use super::registry::{Key, Registry};
use crate::error::{Error, Result};
use crate::renderer::{self, FrameSink, Grid};
use crate::screen::Screen;
use crate::window::Window;

/// Handle to a screen owned by a [`Compositor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(Key);

/// Handle to a window owned by a [`Compositor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(Key);

#[derive(Debug)]
struct ScreenSlot {
    screen: Screen,
    /// Attached windows, bottom to top. No duplicates.
    windows: Vec<WindowId>,
}

#[derive(Debug)]
struct WindowSlot {
    window: Window,
    attached: Option<ScreenId>,
}

impl WindowSlot {
    fn link(&mut self, screen: ScreenId) {
        self.attached = Some(screen);
    }

    fn unlink(&mut self) {
        self.attached = None;
    }
}

/// Owns screens and windows and composes frames from them.
#[derive(Debug, Default)]
pub struct Compositor {
    screens: Registry<ScreenSlot>,
    windows: Registry<WindowSlot>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Take ownership of a screen. It starts with no windows.
    pub fn add_screen(&mut self, screen: Screen) -> ScreenId {
        ScreenId(self.screens.insert(ScreenSlot {
            screen,
            windows: Vec::new(),
        }))
    }

    /// Take ownership of a window. It starts detached.
    pub fn add_window(&mut self, window: Window) -> WindowId {
        WindowId(self.windows.insert(WindowSlot {
            window,
            attached: None,
        }))
    }

    /// Remove a window, detaching it from its screen first.
    pub fn remove_window(&mut self, id: WindowId) -> Result<Window> {
        if let Some(screen) = self.attached_screen(id)? {
            self.detach(screen, id)?;
        }
        let slot = self.windows.remove(id.0).ok_or(Error::UnknownWindow(id))?;
        debug!(window = ?id, "removed window");
        Ok(slot.window)
    }

    /// Remove a screen, detaching every window attached to it.
    pub fn remove_screen(&mut self, id: ScreenId) -> Result<Screen> {
        let slot = self.screens.remove(id.0).ok_or(Error::UnknownScreen(id))?;
        for window in &slot.windows {
            if let Some(window_slot) = self.windows.get_mut(window.0) {
                window_slot.unlink();
            }
        }
        debug!(screen = ?id, detached = slot.windows.len(), "removed screen");
        Ok(slot.screen)
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub fn screen(&self, id: ScreenId) -> Result<&Screen> {
        self.screen_slot(id).map(|slot| &slot.screen)
    }

    pub fn window(&self, id: WindowId) -> Result<&Window> {
        self.window_slot(id).map(|slot| &slot.window)
    }

    /// Mutable access to a window's content and placement.
    ///
    /// Attachment is not part of [`Window`], so nothing reachable from here
    /// can break the screen/window links.
    pub fn window_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        self.windows
            .get_mut(id.0)
            .map(|slot| &mut slot.window)
            .ok_or(Error::UnknownWindow(id))
    }

    /// Windows attached to `screen`, bottom to top.
    pub fn windows(&self, screen: ScreenId) -> Result<&[WindowId]> {
        self.screen_slot(screen).map(|slot| slot.windows.as_slice())
    }

    /// The screen `window` is attached to, if any.
    pub fn attached_screen(&self, window: WindowId) -> Result<Option<ScreenId>> {
        self.window_slot(window).map(|slot| slot.attached)
    }

    pub fn is_attached(&self, screen: ScreenId, window: WindowId) -> bool {
        self.screen_slot(screen)
            .is_ok_and(|slot| slot.windows.contains(&window))
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    fn screen_slot(&self, id: ScreenId) -> Result<&ScreenSlot> {
        self.screens.get(id.0).ok_or(Error::UnknownScreen(id))
    }

    fn window_slot(&self, id: WindowId) -> Result<&WindowSlot> {
        self.windows.get(id.0).ok_or(Error::UnknownWindow(id))
    }

    // =========================================================================
    // Attach / Detach
    // =========================================================================

    /// Put `window` on top of `screen`'s stack.
    ///
    /// Fails with [`Error::AlreadyAttached`] if the window is attached to
    /// this or any other screen. Nothing changes on failure.
    pub fn attach(&mut self, screen: ScreenId, window: WindowId) -> Result<()> {
        let screen_slot = self
            .screens
            .get_mut(screen.0)
            .ok_or(Error::UnknownScreen(screen))?;
        let window_slot = self
            .windows
            .get_mut(window.0)
            .ok_or(Error::UnknownWindow(window))?;

        if let Some(current) = window_slot.attached {
            return Err(Error::AlreadyAttached {
                window,
                screen: current,
            });
        }
        if screen_slot.windows.contains(&window) {
            return Err(Error::AlreadyAttached { window, screen });
        }

        screen_slot.windows.push(window);
        window_slot.link(screen);

        debug!(?screen, ?window, layer = screen_slot.windows.len() - 1, "attached window");
        Ok(())
    }

    /// Take `window` off `screen`.
    ///
    /// Fails with [`Error::NotAttached`] if it is not in the screen's stack.
    /// Reattaching later puts it on top, not back at its old layer.
    pub fn detach(&mut self, screen: ScreenId, window: WindowId) -> Result<()> {
        let screen_slot = self
            .screens
            .get_mut(screen.0)
            .ok_or(Error::UnknownScreen(screen))?;
        let window_slot = self
            .windows
            .get_mut(window.0)
            .ok_or(Error::UnknownWindow(window))?;

        let position = screen_slot
            .windows
            .iter()
            .position(|&id| id == window)
            .ok_or(Error::NotAttached { window, screen })?;

        if window_slot.attached != Some(screen) {
            let err = Error::CompositorInvariantViolation(format!(
                "{window:?} is listed by {screen:?} but linked to {:?}",
                window_slot.attached
            ));
            error!(%err, "screen and window links disagree");
            return Err(err);
        }

        screen_slot.windows.remove(position);
        window_slot.unlink();

        debug!(?screen, ?window, "detached window");
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Compose every window attached to `screen` into a grid.
    pub fn compose(&self, screen: ScreenId) -> Result<Grid> {
        let slot = self.screen_slot(screen)?;
        let windows = slot
            .windows
            .iter()
            .map(|&id| {
                self.windows.get(id.0).map(|w| &w.window).ok_or_else(|| {
                    let err = Error::CompositorInvariantViolation(format!(
                        "{screen:?} lists missing window {id:?}"
                    ));
                    error!(%err, "attached window not found");
                    err
                })
            })
            .collect::<Result<Vec<_>>>()?;

        renderer::compose(&slot.screen, windows)
    }

    /// Render `screen` to text: `height` rows of `width` characters, each
    /// followed by a line break.
    pub fn render(&self, screen: ScreenId) -> Result<String> {
        self.compose(screen).map(|grid| grid.to_frame())
    }

    /// Write a cleared and freshly rendered frame to `sink`.
    ///
    /// Nothing is written if rendering fails.
    pub fn update(&self, screen: ScreenId, sink: &mut impl FrameSink) -> Result<()> {
        let frame = self.render(screen)?;
        let mut output = self.screen(screen)?.clear();
        output.push_str(&frame);
        sink.write_frame(&output)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
