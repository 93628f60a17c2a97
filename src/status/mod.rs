//! Package and shipment status taxonomy
//!
//! The canonical sets mirror the values accepted by the persisted
//! package/shipment records. Lookups never fail: absent values come back as
//! `None`, and [`convert_legacy_status`] fails open to [`DEFAULT_STATUS`].

pub mod badge;
pub mod legacy;
pub mod taxonomy;

pub use badge::get_status_badge_classes;
pub use legacy::{StatusResolution, convert_legacy_status, legacy_mappings, resolve_status};
pub use taxonomy::{
    DEFAULT_STATUS, EntityType, StatusColor, StatusConfig, get_status_config, is_valid_status,
    statuses,
};
