//! Compositor engine - ownership of screens and windows.
//!
//! The engine manages the core data structures:
//! - Registry: Generational slot allocation with index reuse
//! - Compositor: Screens, windows and the attach/detach protocol
//!
//! # Architecture
//!
//! Screens and windows do not point at each other. Both live in the
//! compositor's registries and the links between them are handles:
//!
//! ```text
//! Screen 0: windows = [Window 2, Window 0]   (bottom to top)
//! Window 0: attached = Screen 0
//! Window 1: attached = none
//! Window 2: attached = Screen 0
//! ```
//!
//! Destruction order never matters: removing either side clears the link.

mod compositor;
mod registry;

pub use compositor::{Compositor, ScreenId, WindowId};
