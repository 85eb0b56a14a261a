//! Configuration options to control how tags are decoded

mod parse_options;

pub use parse_options::{ParseOptions, UnsynchronisationScheme};
