// ============================================================
// Layer 3: Token Lexicon
// ============================================================
// The corpus only ever contains ten distinct strings: the
// English names of the digits 1..=9 and a padding token that
// stands in for digit 0.
//
// Example:
//   digits [3, 5, 1] padded to 6 →
//   "Three Five One PAD_TOKEN PAD_TOKEN PAD_TOKEN"

/// Filler token used to right-pad sequences to a fixed length.
pub const PAD_TOKEN: &str = "PAD_TOKEN";

/// Digit → word table. Index 0 is the padding token.
const DIGIT_WORDS: [&str; 10] = [
    PAD_TOKEN, "One", "Two", "Three", "Four",
    "Five", "Six", "Seven", "Eight", "Nine",
];

/// Odd digits a positive (label 1) sequence is drawn from
pub const ODD_DIGITS: [u8; 5] = [1, 3, 5, 7, 9];

/// Even digits a negative (label 0) sequence is drawn from
pub const EVEN_DIGITS: [u8; 4] = [2, 4, 6, 8];

/// Word form of a digit, or None outside 0..=9
pub fn digit_to_word(digit: u8) -> Option<&'static str> {
    DIGIT_WORDS.get(digit as usize).copied()
}

pub fn is_padding(token: &str) -> bool {
    token == PAD_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_maps_to_padding() {
        assert_eq!(digit_to_word(0), Some(PAD_TOKEN));
        assert!(is_padding(digit_to_word(0).unwrap()));
    }

    #[test]
    fn test_every_class_digit_has_a_word() {
        for d in ODD_DIGITS.iter().chain(EVEN_DIGITS.iter()) {
            let w = digit_to_word(*d).unwrap();
            assert!(!is_padding(w));
        }
        assert_eq!(digit_to_word(7), Some("Seven"));
    }

    #[test]
    fn test_out_of_range_digit() {
        assert_eq!(digit_to_word(10), None);
    }
}
