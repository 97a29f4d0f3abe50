//! HTML output for the demo page.

mod escape;
mod page;

pub use escape::escape_html;
pub use page::{record_tables, render_page};
