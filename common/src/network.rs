pub mod address;
pub mod range;
pub mod request;
pub mod subnet;
