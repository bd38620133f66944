//! Widget fence rendering.
//!
//! Each widget fence becomes an HTML placeholder that a client-side
//! component hydrates on page load:
//!
//! - **Valid configuration**: `<div class="interactive-{kind}" data-config="{json}">`
//!   with a `<noscript>` fallback naming the widget
//! - **Invalid YAML**: a warning admonition in place of the widget

mod error;
mod html;
mod page;
mod tree;

pub use error::{RenderError, Result};
pub use html::{
    escape_attribute, escape_text, render_config, render_fence, render_invalid, widget_title,
};
pub use page::{Rendered, render_markdown};
pub use tree::{RenderedFile, render_tree};
