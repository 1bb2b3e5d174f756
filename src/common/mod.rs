//! Shared constants

pub mod constants;
