//! Shared value types and error types.

mod charset;
mod error;

pub use charset::CharSet;
pub use error::{CharSetError, RangeError};
