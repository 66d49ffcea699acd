pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{CookieFileStore, Document, HttpApiClient, MemorySessionStore};
pub use config::FrontConfig;
pub use crate::core::{front::FrontEngine, session::SessionContext};
pub use utils::error::{ApiError, FrontError, Result};
