//! Feed module
//!
//! Turns stored announcements into display-ready entries and renders the
//! HTML listing.

pub mod interpreter;
pub mod linkify;
pub mod relative_time;
pub mod renderer;
pub mod tags;
pub mod view;

pub use linkify::LinkMode;
pub use renderer::{render_page, PageOptions};
pub use view::{RecordRenderer, RenderedFeed};
