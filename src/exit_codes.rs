//! Standard exit codes for the `ttarius-label` binary

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Validation rejected the input (barcode text, status value)
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Rendering fell back to a placeholder or blank image
pub const EXIT_RENDER_FALLBACK: i32 = 102;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Configuration error (invalid settings file, bad colors or dimensions)
pub const EXIT_CONFIG_ERROR: i32 = 109;
