//! Pre-encoding validation of barcode text

use super::symbols::is_supported;

/// Longest identifier accepted for encoding
pub const MAX_BARCODE_LENGTH: usize = 50;

/// True when `text` is 1..=50 characters, all in the supported set
/// (letters in either case, digits, space, `- . $ / + %`).
pub fn validate_barcode_text(text: &str) -> bool {
    let len = text.chars().count();
    if len == 0 || len > MAX_BARCODE_LENGTH {
        return false;
    }
    text.chars().all(is_supported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_rejected() {
        assert!(!validate_barcode_text("ORDER#123"));
        assert!(validate_barcode_text("ORDER-123"));
    }

    #[test]
    fn test_supported_punctuation_and_case() {
        assert!(validate_barcode_text("pkg 12.5 $/+%"));
        assert!(!validate_barcode_text("PKG_1"));
        assert!(!validate_barcode_text("PKG\n1"));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!validate_barcode_text(""));
        assert!(validate_barcode_text(&"9".repeat(MAX_BARCODE_LENGTH)));
        assert!(!validate_barcode_text(&"9".repeat(MAX_BARCODE_LENGTH + 1)));
    }
}
