pub mod error;
pub mod meta;
