//! Output helpers for rendered labels

pub mod download;
pub mod print;

pub use download::download_barcode;
pub use print::{open_print_view, parse_metadata, render_print_document};
