//! # Markup Helpers
//!
//! Plain text substitution for embedding matched content in markup output.
//! Nothing here knows about nesting.
//!
//! - **`escape`**: `escape_markup` entity escaping with `EscapeOptions`
//! - **`envelope`**: CDATA and `<html>` wrap/strip helpers

pub mod envelope;
pub mod escape;

pub use envelope::{
    BODY_END, BODY_START, CDATA_END, CDATA_START, HTML_END, HTML_START, is_wrapped_in_html,
    strip_html, wrap_in_cdata, wrap_in_html,
};
pub use escape::{EscapeOptions, escape_markup, escape_markup_default};
