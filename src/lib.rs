//! # Twine Wind
//!
//! Wind turbine blade models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The main model, [`models::wind::BladeComparison`], compares a conventional
//! blade against a bio-inspired blade with a tubercled leading edge (the bumps
//! found on humpback whale flippers). It produces lift coefficient curves over
//! a sweep of angles of attack and a power estimate for both designs at a
//! single operating point.
//!
//! The aerodynamics are a deliberately simple analytical model meant for
//! teaching and parameter exploration, not engineering design.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API, but their APIs are not
//! stable.

pub mod models;
pub mod support;
