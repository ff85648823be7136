//! `ewmh` implements the client side of the [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/)
//! as a way to integrate with EWMH compatible window managers. The EWMH spec builds on the lower
//! level Inter Client Communication Conventions Manual (ICCCM) to define interactions between
//! window managers, compositing managers and applications.
//!
//! Every property and message the spec defines maps to a single method on [`Ewmh`]: reads decode
//! the property into a typed value, writes enqueue a client message asking the window manager to
//! act. Writes are never confirmed by the window manager, so after a [`Ewmh::flush`] the only way
//! to observe the effect is to query again:
//!
//! ```ignore
//! use ewmh::prelude::*;
//!
//! let ewmh = Ewmh::connect()?;
//! let win = ewmh.active_window()?;
//! ewmh.set_wm_desktop(win, 2)?;
//! ewmh.flush()?;
//! assert_eq!(ewmh.wm_desktop(win)?, 2);
//! ```
mod error;
mod ewmh;
mod model;
pub mod session;
pub use crate::ewmh::*;
pub use error::*;
pub use model::*;

/// All essential symbols in a simple consumable form
///
/// ### Examples
/// ```
/// use ewmh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::session::{DisplaySession, XSession};
    pub use crate::*;
}
