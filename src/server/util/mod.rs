//! Small helpers shared by controllers and services.

pub mod parse;
pub mod request;
pub mod validate;
