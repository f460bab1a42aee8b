//! Store configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use catalog_core::DomainError;

/// Environment variable selecting [`UpdatePlacement`].
pub const UPDATE_PLACEMENT_ENV: &str = "CATALOG_UPDATE_PLACEMENT";

/// Where an updated product ends up in the store's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePlacement {
    /// Remove the old record and append the new one.
    #[default]
    MoveToEnd,
    /// Replace the old record in its current slot.
    InPlace,
}

impl FromStr for UpdatePlacement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "move_to_end" => Ok(Self::MoveToEnd),
            "in_place" => Ok(Self::InPlace),
            other => Err(DomainError::validation(format!(
                "unknown update placement '{other}' (expected 'move_to_end' or 'in_place')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub update_placement: UpdatePlacement,
}

impl StoreConfig {
    /// Build from `CATALOG_UPDATE_PLACEMENT`, keeping defaults for anything
    /// unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_placement_var(std::env::var(UPDATE_PLACEMENT_ENV).ok().as_deref())
    }

    fn from_placement_var(value: Option<&str>) -> Self {
        let update_placement = match value {
            None => UpdatePlacement::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "{UPDATE_PLACEMENT_ENV} invalid; using default");
                UpdatePlacement::default()
            }),
        };
        Self { update_placement }
    }
}
