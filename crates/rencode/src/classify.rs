//! Lead-byte predicates used by the decoder before dispatch.

use crate::constants::*;

#[inline]
fn in_range(token: u8, start: u8, count: u8) -> bool {
    token >= start && (token - start) < count
}

#[inline]
pub fn is_compact_int(token: u8) -> bool {
    is_compact_pos_int(token) || is_compact_neg_int(token)
}

#[inline]
pub fn is_compact_pos_int(token: u8) -> bool {
    in_range(token, POS_INT_START, POS_INT_COUNT)
}

#[inline]
pub fn is_compact_neg_int(token: u8) -> bool {
    in_range(token, NEG_INT_START, NEG_INT_COUNT)
}

#[inline]
pub fn is_short_list(token: u8) -> bool {
    in_range(token, LIST_START, LIST_COUNT)
}

#[inline]
pub fn is_short_map(token: u8) -> bool {
    in_range(token, MAP_START, MAP_COUNT)
}

#[inline]
pub fn is_short_text(token: u8) -> bool {
    in_range(token, TEXT_START, TEXT_COUNT)
}

#[inline]
pub fn is_digit(token: u8) -> bool {
    token.is_ascii_digit()
}

/// A lead byte that opens a text value, short or long form.
#[inline]
pub fn is_text(token: u8) -> bool {
    is_short_text(token) || is_digit(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_do_not_overlap() {
        let predicates: [fn(u8) -> bool; 6] = [
            is_compact_pos_int,
            is_compact_neg_int,
            is_short_list,
            is_short_map,
            is_short_text,
            is_digit,
        ];
        for token in 0..=255u8 {
            let hits = predicates.iter().filter(|p| p(token)).count();
            assert!(hits <= 1, "token {token} matched {hits} ranges");
        }
    }

    #[test]
    fn range_edges() {
        assert!(is_compact_pos_int(0));
        assert!(is_compact_pos_int(43));
        assert!(!is_compact_pos_int(FLOAT64));
        assert!(is_compact_neg_int(70));
        assert!(is_compact_neg_int(101));
        assert!(!is_compact_neg_int(NULL));
        assert!(!is_compact_neg_int(102));
        assert!(is_short_map(102));
        assert!(is_short_map(126));
        assert!(!is_short_map(END));
        assert!(is_short_text(128));
        assert!(is_short_text(191));
        assert!(is_short_list(192));
        assert!(is_short_list(255));
        assert!(!is_short_text(192));
    }

    #[test]
    fn fixed_tags_are_unclassified() {
        let tags = [
            LIST, MAP, NUMBER, INT8, INT16, INT32, INT64, FLOAT32, FLOAT64, TRUE, FALSE, NULL,
            END, LENGTH_DELIMITER,
        ];
        for token in tags {
            assert!(!is_compact_int(token), "token {token}");
            assert!(!is_short_list(token));
            assert!(!is_short_map(token));
            assert!(!is_text(token));
        }
    }
}
