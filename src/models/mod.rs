//! BlinkUp Data Models
//!
//! Payload structures delivered to the frontend callback channel. The wire
//! shape (key names, stringified codes) is a compatibility contract with the
//! historical plugin and must not change.

pub mod device;
pub mod result;

pub use device::*;
pub use result::*;
