//! Report composition.

mod composer;
mod markup;

pub use composer::{compose, shutdown_notice};
pub use markup::escape_html;
