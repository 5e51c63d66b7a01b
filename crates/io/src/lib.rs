//! # demeter-io
//!
//! Write seed and mock master data as delimited UTF-8 artifacts ready for
//! a warehouse bulk load. Bridges row structs into on-disk CSV files.

mod error;
mod writer;

pub use error::IoError;
pub use writer::write_delimited;
