//! Presenter configuration module

pub mod presenter_config;

pub use presenter_config::*;
