pub mod convert;
mod input;
pub mod project;
