//! Library side of the widgetdoc CLI: logging setup, the check pipeline and
//! the render command.

pub mod logging;
pub mod pipeline;
pub mod render;
pub mod types;
