//! Public Twine models.
//!
//! Models are organized into domain-specific submodules (currently only
//! `wind`).
//!
//! Each model keeps its computation in an internal `core` submodule.
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to that core.

pub mod wind;
