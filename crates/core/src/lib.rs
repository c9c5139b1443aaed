//! Domain types, validation, and pure tax computations for the tax payment
//! service. Nothing in this crate performs I/O.

pub mod error;
pub mod payment;
pub mod tax;
pub mod types;
pub mod validation;
