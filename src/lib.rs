pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod indices;
pub mod input;
pub mod landcover;
pub mod legend;
pub mod outlook;
pub mod policy;
pub mod preset;
pub mod reporter;
pub mod scoring;
pub mod stats;
pub mod timeseries;

pub use error::{Error, Result};
