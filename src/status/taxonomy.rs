//! Canonical status sets for packages and shipments

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity a status value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Package,
    Shipment,
}

impl EntityType {
    /// Parse an entity type name (case insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "package" => Some(Self::Package),
            "shipment" => Some(Self::Shipment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Package => "package",
            EntityType::Shipment => "shipment",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed badge palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Gray,
    Red,
    Yellow,
    Green,
    Blue,
    Indigo,
    Purple,
    Orange,
}

impl StatusColor {
    /// Parse a color name; anything outside the palette is `None`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gray" => Some(Self::Gray),
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "indigo" => Some(Self::Indigo),
            "purple" => Some(Self::Purple),
            "orange" => Some(Self::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Gray => "gray",
            StatusColor::Red => "red",
            StatusColor::Yellow => "yellow",
            StatusColor::Green => "green",
            StatusColor::Blue => "blue",
            StatusColor::Indigo => "indigo",
            StatusColor::Purple => "purple",
            StatusColor::Orange => "orange",
        }
    }
}

/// Display metadata for one canonical status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusConfig {
    pub value: &'static str,
    pub label: &'static str,
    pub color: StatusColor,
    pub description: &'static str,
}

const fn status(
    value: &'static str,
    label: &'static str,
    color: StatusColor,
    description: &'static str,
) -> StatusConfig {
    StatusConfig {
        value,
        label,
        color,
        description,
    }
}

/// Fallback for values that are neither canonical nor legacy
pub const DEFAULT_STATUS: &str = "pending";

// Values must stay in sync with the check constraints on the packages table
pub const PACKAGE_STATUSES: &[StatusConfig] = &[
    status(
        "pending",
        "Pending",
        StatusColor::Yellow,
        "Expected at the warehouse, not yet received",
    ),
    status(
        "received",
        "Received",
        StatusColor::Blue,
        "Checked in at the warehouse",
    ),
    status(
        "processing",
        "Processing",
        StatusColor::Purple,
        "Being inspected, repacked or consolidated",
    ),
    status(
        "ready_to_ship",
        "Ready to Ship",
        StatusColor::Indigo,
        "Packed and waiting for a shipment",
    ),
    status(
        "shipped",
        "Shipped",
        StatusColor::Orange,
        "Left the warehouse as part of a shipment",
    ),
    status(
        "delivered",
        "Delivered",
        StatusColor::Green,
        "Delivered to the customer",
    ),
    status(
        "on_hold",
        "On Hold",
        StatusColor::Red,
        "Held pending customer action or inspection",
    ),
    status(
        "returned",
        "Returned",
        StatusColor::Gray,
        "Returned to the sender",
    ),
];

// Values must stay in sync with the check constraints on the shipments table
pub const SHIPMENT_STATUSES: &[StatusConfig] = &[
    status(
        "pending",
        "Pending",
        StatusColor::Yellow,
        "Requested by the customer, awaiting a quote",
    ),
    status(
        "quoted",
        "Quoted",
        StatusColor::Blue,
        "Quote sent, awaiting payment",
    ),
    status(
        "paid",
        "Paid",
        StatusColor::Indigo,
        "Payment received",
    ),
    status(
        "processing",
        "Processing",
        StatusColor::Purple,
        "Being prepared for dispatch",
    ),
    status(
        "shipped",
        "Shipped",
        StatusColor::Orange,
        "Handed over to the carrier",
    ),
    status(
        "in_transit",
        "In Transit",
        StatusColor::Orange,
        "Moving through the carrier network",
    ),
    status(
        "delivered",
        "Delivered",
        StatusColor::Green,
        "Delivered to the destination address",
    ),
    status(
        "cancelled",
        "Cancelled",
        StatusColor::Red,
        "Cancelled before dispatch",
    ),
];

/// All canonical statuses for an entity type, in lifecycle order
pub fn statuses(entity: EntityType) -> &'static [StatusConfig] {
    match entity {
        EntityType::Package => PACKAGE_STATUSES,
        EntityType::Shipment => SHIPMENT_STATUSES,
    }
}

/// True iff `candidate` is exactly one of the canonical values (case sensitive)
pub fn is_valid_status(candidate: &str, entity: EntityType) -> bool {
    statuses(entity).iter().any(|s| s.value == candidate)
}

/// Display metadata for a canonical value; `None` when not found
pub fn get_status_config(candidate: &str, entity: EntityType) -> Option<&'static StatusConfig> {
    statuses(entity).iter().find(|s| s.value == candidate)
}
