//! Text to bar-pattern encoding

use super::symbols::{START_PATTERN, STOP_PATTERN, SYMBOL_WIDTH, is_supported, pattern_for};
use log::{debug, trace};

/// Result of encoding one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// `'0'`/`'1'` modules, start and stop patterns included
    pub pattern: String,
    /// Uppercased text that was actually encoded
    pub encoded_text: String,
    /// True when characters were dropped from the input
    pub lossy: bool,
}

impl Encoding {
    /// Number of modules in the pattern
    pub fn modules(&self) -> usize {
        self.pattern.len()
    }
}

/// Uppercase and drop unsupported characters
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(|c| is_supported(*c))
        .collect()
}

/// Encode text into the bar pattern. Never fails; unsupported input is
/// filtered out and reported through [`Encoding::lossy`].
pub fn encode(text: &str) -> Encoding {
    let encoded_text = normalize(text);
    // Filtering only removes characters, so any length change means loss
    let lossy = encoded_text.len() != text.to_uppercase().len();

    let mut pattern = String::with_capacity(
        START_PATTERN.len() + encoded_text.len() * SYMBOL_WIDTH + STOP_PATTERN.len(),
    );
    pattern.push_str(START_PATTERN);

    for c in encoded_text.chars() {
        match pattern_for(c) {
            Some(bits) => pattern.push_str(bits),
            None => trace!("Skipping character without symbol: {:?}", c),
        }
    }

    pattern.push_str(STOP_PATTERN);

    if lossy {
        debug!(
            "✂️ Barcode text filtered: input={:?} encoded={:?}",
            text, encoded_text
        );
    }

    Encoding {
        pattern,
        encoded_text,
        lossy,
    }
}
