mod format;
mod report;


pub use format::{TABLE_HEADERS, render_json, render_text};
pub use report::{Report, aggregate};
