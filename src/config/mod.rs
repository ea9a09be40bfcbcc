//! Configuration module for the envelope tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EnvelopePaths;
pub use settings::Settings;
