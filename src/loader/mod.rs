pub mod parser;
pub mod source;
