//! Errors produced while parsing.
//!
//! The parser reports errors as [`deriv_error::Error`] values, each carrying one of the kinds
//! from [`kind`] together with the regions of the source code it refers to.

pub mod kind;

pub use deriv_error::Error;
