//! Migration of historical status values into the canonical sets

use super::taxonomy::{DEFAULT_STATUS, EntityType, StatusConfig, get_status_config};
use log::{debug, warn};

/// Deprecated package values and their replacements
pub const PACKAGE_LEGACY_STATUSES: &[(&str, &str)] = &[
    ("expected", "pending"),
    ("arrived", "received"),
    ("in_warehouse", "received"),
    ("consolidating", "processing"),
    ("ready", "ready_to_ship"),
    ("dispatched", "shipped"),
    ("held", "on_hold"),
];

/// Deprecated shipment values and their replacements
pub const SHIPMENT_LEGACY_STATUSES: &[(&str, &str)] = &[
    ("awaiting_quote", "pending"),
    ("quote_sent", "quoted"),
    ("payment_received", "paid"),
    ("preparing", "processing"),
    ("dispatched", "shipped"),
    ("in_progress", "in_transit"),
    ("completed", "delivered"),
    ("canceled", "cancelled"),
];

pub fn legacy_mappings(entity: EntityType) -> &'static [(&'static str, &'static str)] {
    match entity {
        EntityType::Package => PACKAGE_LEGACY_STATUSES,
        EntityType::Shipment => SHIPMENT_LEGACY_STATUSES,
    }
}

/// Outcome of resolving a stored status value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusResolution {
    /// Already canonical
    Canonical(&'static StatusConfig),
    /// Legacy value translated to a canonical one
    Migrated {
        from: String,
        to: &'static StatusConfig,
    },
    /// Neither canonical nor legacy
    Unknown(String),
}

impl StatusResolution {
    /// Canonical value, or `None` for unknown input
    pub fn canonical(&self) -> Option<&'static str> {
        match self {
            StatusResolution::Canonical(config) => Some(config.value),
            StatusResolution::Migrated { to, .. } => Some(to.value),
            StatusResolution::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StatusResolution::Unknown(_))
    }
}

/// Strict resolution: unknown values are reported instead of defaulted
pub fn resolve_status(value: &str, entity: EntityType) -> StatusResolution {
    if let Some(config) = get_status_config(value, entity) {
        return StatusResolution::Canonical(config);
    }

    let mapped = legacy_mappings(entity)
        .iter()
        .find(|(legacy, _)| *legacy == value)
        .and_then(|(_, canonical)| get_status_config(canonical, entity));

    match mapped {
        Some(to) => StatusResolution::Migrated {
            from: value.to_string(),
            to,
        },
        None => StatusResolution::Unknown(value.to_string()),
    }
}

/// Fail-open conversion: canonical passthrough, legacy lookup, else `pending`.
///
/// Callers needing to detect bad data should use [`resolve_status`].
pub fn convert_legacy_status(value: &str, entity: EntityType) -> &'static str {
    match resolve_status(value, entity) {
        StatusResolution::Canonical(config) => config.value,
        StatusResolution::Migrated { from, to } => {
            debug!("🔁 Migrated legacy {} status: {} -> {}", entity, from, to.value);
            to.value
        }
        StatusResolution::Unknown(raw) => {
            warn!(
                "⚠️ Unknown {} status '{}', defaulting to '{}'",
                entity, raw, DEFAULT_STATUS
            );
            DEFAULT_STATUS
        }
    }
}
