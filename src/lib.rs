pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::batch::{BatchImporter, BatchReport};
pub use app::export::ContactExporter;
pub use config::BookConfig;
pub use core::add_parser::AddCommandParser;
pub use core::command::AddCommand;
pub use domain::model::Person;
pub use domain::ports::CommandParser;
pub use utils::error::{BookError, Result};
