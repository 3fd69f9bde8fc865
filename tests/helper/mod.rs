//! Shared test utilities

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
