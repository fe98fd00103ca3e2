pub mod query;

pub use query::{FileReport, query_command, query_file};
