pub mod formatter;

pub use formatter::{format_text, print_json, print_text, write_json, write_text};
