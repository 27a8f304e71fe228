//! The three call shapes the services use: `call`, `parse_simple` and
//! `call_structured`.

pub mod object;
pub mod text;

pub use object::{call_structured, ObjectCompletion, StructuredOutput};
pub use text::{call, parse_simple, TextCompletion};
