pub mod demo;

pub use demo::{AddressDto, SignupRequest, SignupResponse};
