pub mod function_call;
pub mod location;

// Re-export commonly used types
pub use function_call::{ArgValue, FunctionArg, FunctionCall};
pub use location::SourceLocation;
