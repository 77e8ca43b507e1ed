//! Supporting utilities used by models.
//!
//! These APIs are public but not yet stable.

pub mod constraint;
