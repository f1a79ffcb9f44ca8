//! Valentine Quest - backend for a scripted Valentine's castle game

pub mod config;
pub mod error;
pub mod types;

pub mod pages;
pub mod script;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
