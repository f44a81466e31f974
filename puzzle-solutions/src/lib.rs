//! Daily puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions organized by year. Each
//! solution uses the `AutoRegister` derive macro for automatic plugin
//! registration with the solver framework. Reusable algorithmic pieces live
//! in [`utils`].

pub mod utils;

#[cfg(feature = "solutions")]
pub mod year_2025;
