// Symbol table for the simplified Code-128-style encoding.
// Patterns are Code 128 set B modules (1 = bar, 0 = space); there is no
// check character, so output is not guaranteed to scan as strict Code 128.

/// Start pattern (Code 128 Start B, alphanumeric mode)
pub const START_PATTERN: &str = "11010010000";

/// Stop pattern (13 modules, includes the terminating bar)
pub const STOP_PATTERN: &str = "1100011101011";

/// Width of every character pattern in modules
pub const SYMBOL_WIDTH: usize = 11;

/// Punctuation accepted besides letters, digits and space
pub const SUPPORTED_PUNCTUATION: &[char] = &['-', '.', '$', '/', '+', '%'];

const SYMBOLS: &[(char, &str)] = &[
    (' ', "11011001100"),
    ('$', "10010001100"),
    ('%', "10001001100"),
    ('+', "11000100100"),
    ('-', "10011011100"),
    ('.', "10011001110"),
    ('/', "10111001100"),
    ('0', "10011101100"),
    ('1', "10011100110"),
    ('2', "11001110010"),
    ('3', "11001011100"),
    ('4', "11001001110"),
    ('5', "11011100100"),
    ('6', "11001110100"),
    ('7', "11101101110"),
    ('8', "11101001100"),
    ('9', "11100101100"),
    ('A', "10100011000"),
    ('B', "10001011000"),
    ('C', "10001000110"),
    ('D', "10110001000"),
    ('E', "10001101000"),
    ('F', "10001100010"),
    ('G', "11010001000"),
    ('H', "11000101000"),
    ('I', "11000100010"),
    ('J', "10110111000"),
    ('K', "10110001110"),
    ('L', "10001101110"),
    ('M', "10111011000"),
    ('N', "10111000110"),
    ('O', "10001110110"),
    ('P', "11101110110"),
    ('Q', "11010001110"),
    ('R', "11000101110"),
    ('S', "11011101000"),
    ('T', "11011100010"),
    ('U', "11011101110"),
    ('V', "11101011000"),
    ('W', "11101000110"),
    ('X', "11100010110"),
    ('Y', "11101101000"),
    ('Z', "11101100010"),
];

/// Bar pattern for an (already uppercased) character
pub fn pattern_for(c: char) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, pattern)| *pattern)
}

/// True for characters the encoder keeps after uppercasing
pub fn is_supported(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || SUPPORTED_PUNCTUATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_patterns_are_eleven_modules() {
        for (symbol, pattern) in SYMBOLS {
            assert_eq!(pattern.len(), SYMBOL_WIDTH, "{symbol}");
            assert!(pattern.starts_with('1') && pattern.ends_with('0'), "{symbol}");
            assert!(pattern.chars().all(|c| c == '0' || c == '1'));
        }
        assert_eq!(START_PATTERN.len(), SYMBOL_WIDTH);
        assert_eq!(STOP_PATTERN.len(), 13);
    }

    #[test]
    fn test_patterns_are_distinct() {
        let patterns: HashSet<&str> = SYMBOLS.iter().map(|(_, p)| *p).collect();
        assert_eq!(patterns.len(), SYMBOLS.len());
        assert!(!patterns.contains(START_PATTERN));
    }

    #[test]
    fn test_every_supported_uppercase_char_has_pattern() {
        let chars = ('A'..='Z')
            .chain('0'..='9')
            .chain([' '])
            .chain(SUPPORTED_PUNCTUATION.iter().copied());
        for c in chars {
            assert!(is_supported(c));
            assert!(pattern_for(c).is_some(), "missing pattern for {c:?}");
        }
    }

    #[test]
    fn test_unsupported_chars() {
        for c in ['#', '_', '@', '*', 'é'] {
            assert!(!is_supported(c));
            assert!(pattern_for(c).is_none());
        }
    }
}
