pub mod convert;
pub mod documentation;
pub mod health;
