pub mod config;
pub mod controllers;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod site;

pub use config::SiteConfig;
pub use error::ConfigError;
pub use site::{Site, SiteSnapshot};
