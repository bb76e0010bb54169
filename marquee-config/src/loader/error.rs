use std::num::ParseIntError;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load catalog configuration: {0}")]
    Catalog(#[source] anyhow::Error),
    #[error("invalid MARQUEE_ROW_CAP '{value}'")]
    InvalidRowCap {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
