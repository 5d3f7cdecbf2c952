//! Core types for quotebook
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
pub mod env_config;
mod error;
mod quote;

pub use constants::*;
pub use env_config::{env_parse_required, env_parse_with_default, env_required};
pub use error::*;
pub use quote::*;
