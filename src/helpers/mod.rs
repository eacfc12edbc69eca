//! Helper functions for the presentation layer
//!
//! Post listing, attachment lookup, date display and the small URL/HTML
//! pieces the blog layouts are assembled from.

mod date;
mod html;
mod list;
mod url;

pub use date::*;
pub use html::*;
pub use list::*;
pub use url::*;
