//! Shared configuration library for Marquee.
//!
//! Row definitions, hero terms and the catalog endpoint are static input to
//! the aggregation core. This crate owns their defaults, loads overrides from
//! files and the environment, and validates the result before the core sees
//! it.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::{ApiConfig, CatalogConfig, HeroConfig, default_rows};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
