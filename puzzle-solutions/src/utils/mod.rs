//! Reusable building blocks shared between solutions

pub mod grid;
