//! Ttarius labels - status taxonomy and barcode label generation
//!
//! This crate provides the package/shipment status taxonomy shared by the
//! customer site and the warehouse console, and renders barcode labels for
//! packages, shipments and warehouse locations.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Correctness
    missing_debug_implementations,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_enum_variant,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::too_many_arguments,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod access;
pub mod api;
pub mod barcode;
pub mod config;
pub mod exceptions;
pub mod exit_codes;
pub mod forms;
pub mod label;
pub mod logger;
pub mod status;
pub mod utils;
pub mod version;

// Re-export main API functions
pub use api::{PrintOptions, SaveOptions, create_label, print_label, save_label, status_report};
pub use config::Settings;
pub use exceptions::LabelError;

// Re-export the core operations
pub use barcode::{
    ArtifactKind, BarcodeArtifact, BarcodeConfig, BarcodeRenderer, LabelPreset, generate_barcode,
    generate_package_barcode, generate_shipment_barcode, generate_warehouse_barcode,
    validate_barcode_text,
};
pub use label::{download_barcode, open_print_view, render_print_document};
pub use status::{
    EntityType, StatusColor, StatusConfig, StatusResolution, convert_legacy_status,
    get_status_badge_classes, get_status_config, is_valid_status, resolve_status,
};
