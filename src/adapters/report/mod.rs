//! Report adapters - Implementations of the ReportRenderer port.
//!
//! - `TextReportRenderer` - Markdown-style tables for terminals
//! - `JsonReportRenderer` - serde_json output for tooling

mod json_renderer;
mod text_renderer;

pub use json_renderer::JsonReportRenderer;
pub use text_renderer::{format_number, TextReportRenderer};
