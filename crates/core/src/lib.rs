//! Domain types and pure logic for the roster gateway.
//!
//! Nothing in this crate performs I/O. The upstream client and the HTTP
//! layer both build on the types defined here.

pub mod employee;
pub mod envelope;
pub mod error;
pub mod identifier;
pub mod ranking;
