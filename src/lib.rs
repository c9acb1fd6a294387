pub mod locale;
pub mod parser;
pub mod types;

// Re-export the main API
pub use parser::{parse_integer, parse_number, parse_plain_number};
pub use types::*;
