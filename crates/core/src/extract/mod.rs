//! Call extraction: turning call expressions into typed `FunctionCall`s

pub mod accumulator;
pub mod arg_modeler;
pub mod call_extractor;

pub use accumulator::{CallCollector, Extraction, SkippedCall, extract_calls};
pub use arg_modeler::model_arg;
pub use call_extractor::extract_call;
