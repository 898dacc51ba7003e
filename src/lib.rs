#![doc = include_str!("../README.md")]

pub mod api;
pub mod browsers;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod services;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use engine::*;
pub use services::*;
pub use types::*;
