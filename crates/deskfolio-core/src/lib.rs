//! Deskfolio core.
//!
//! Pure desktop state: the window manager and its drag/resize primitive, the
//! Finder column browser over the static content tree, the terminal
//! interpreter, and the thin collaborators (dock, menu bar, search overlay,
//! lock screen) that drive them.
//!
//! Nothing here touches the GPU or the platform event loop. The shell crate
//! translates pointer and keyboard input into calls on [`Desktop`] and paints
//! whatever state it finds.

pub mod clock;
pub mod content;
pub mod desktop;
pub mod dock;
pub mod finder;
pub mod geometry;
pub mod lock;
pub mod markdown;
pub mod menubar;
pub mod panels;
pub mod spotlight;
pub mod terminal;
pub mod wm;

pub use clock::{Clock, FixedClock, SystemClock};
pub use desktop::{CursorHint, DeskKey, Desktop, Effect, PointerOutcome, WindowBody};
pub use geometry::{Bounds, Point, Size};
