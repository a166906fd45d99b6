pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ScoreboardEngine, pipeline::ScoreboardPipeline};
pub use utils::error::{Result, ScoreboardError};
