pub mod line;
pub mod message;
pub mod prompt;
