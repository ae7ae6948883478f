//! Playback synchronization core.
//! Keeps seek requests, media readiness, and highlight/URL state consistent without
//! touching the DOM, so every rule here runs the same under tests and in the browser.

mod deep_link;
mod locator;
mod media;
mod seek;
mod session;
mod sync_loop;

pub use deep_link::*;
pub use locator::*;
pub use media::*;
pub use seek::*;
pub use session::*;
pub use sync_loop::*;
