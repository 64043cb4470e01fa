// ============================================================================
// Grouping Engine
// Integer part to Thai text with recursive "ล้าน" grouping
// ============================================================================

use super::group::write_group;
use super::lexicon::MILLION;
use crate::numeric::{DigitSequence, GROUP_WIDTH};

/// Append the Thai text of a whole integer part to `out`.
///
/// Thai names positions up to the hundred-thousands and then repeats "ล้าน".
/// With several non-zero six-digit groups each group left of the rightmost
/// gets one "ล้าน". With a single non-zero group (a round power of a million,
/// e.g. 10^12) that group gets one "ล้าน" per group to its right.
///
/// An all-zero sequence appends nothing; callers substitute "ศูนย์".
pub fn write_integer(out: &mut String, integer: &DigitSequence) {
    if integer.len() <= GROUP_WIDTH {
        write_group(out, integer.digits());
        return;
    }

    let non_zero_groups = integer.groups().filter(|g| !g.is_zero()).count();

    for group in integer.groups().rev().filter(|g| !g.is_zero()) {
        write_group(out, group.digits());

        let millions = if non_zero_groups > 1 {
            usize::from(group.index() > 0)
        } else {
            group.index()
        };
        for _ in 0..millions {
            out.push_str(MILLION);
        }
    }
}

/// Thai text of a whole integer part, empty for zero.
pub fn convert_integer(integer: &DigitSequence) -> String {
    let mut out = String::with_capacity(integer.len() * 18);
    write_integer(&mut out, integer);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::group::convert_group;
    use proptest::prelude::*;

    fn integer(s: &str) -> String {
        convert_integer(&s.parse().unwrap())
    }

    #[test]
    fn test_up_to_six_digits() {
        assert_eq!(integer("1"), "หนึ่ง");
        assert_eq!(integer("21"), "ยี่สิบเอ็ด");
        assert_eq!(integer("2501"), "สองพันห้าร้อยเอ็ด");
        assert_eq!(integer("100000"), "หนึ่งแสน");
    }

    #[test]
    fn test_one_million() {
        assert_eq!(integer("1000000"), "หนึ่งล้าน");
        assert_eq!(integer("1000001"), "หนึ่งล้านเอ็ด");
    }

    #[test]
    fn test_several_groups_one_million_per_boundary() {
        assert_eq!(
            integer("1234567"),
            "หนึ่งล้านสองแสนสามหมื่นสี่พันห้าร้อยหกสิบเจ็ด"
        );
        assert_eq!(integer("100000001"), "หนึ่งร้อยล้านเอ็ด");
        assert_eq!(integer("500200300"), "ห้าร้อยล้านสองแสนสามร้อย");
        assert_eq!(
            integer("999999999"),
            "เก้าร้อยเก้าสิบเก้าล้านเก้าแสนเก้าหมื่นเก้าพันเก้าร้อยเก้าสิบเก้า"
        );
    }

    #[test]
    fn test_telescoping_zeros() {
        assert_eq!(integer("1000000000000"), "หนึ่งล้านล้าน");
        assert_eq!(integer("1000000000000000000"), "หนึ่งล้านล้านล้าน");
        assert_eq!(integer("25000000000000"), "ยี่สิบห้าล้านล้าน");
    }

    #[test]
    fn test_single_non_zero_group_not_leftmost() {
        // 000001|000000 → the lone group sits at g=1
        assert_eq!(integer("000001000000"), "เอ็ดล้าน");
        // Only the rightmost group is non-zero: no suffix at all
        assert_eq!(integer("000000000007"), "เจ็ด");
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(integer("0"), "");
        assert_eq!(integer("0000000000000"), "");
    }

    #[test]
    fn test_nineteen_digits() {
        assert_eq!(
            integer("9223372036854775807"),
            "เก้าล้านสองแสนสองหมื่นสามพันสามร้อยเจ็ดสิบสองล้าน\
             สามหมื่นหกพันแปดร้อยห้าสิบสี่ล้าน\
             เจ็ดแสนเจ็ดหมื่นห้าพันแปดร้อยเจ็ด"
        );
    }

    proptest! {
        #[test]
        fn short_sequences_delegate_to_group(s in "[0-9]{1,6}") {
            let digits: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
            prop_assert_eq!(integer(&s), convert_group(&digits));
        }

        #[test]
        fn conversion_is_deterministic(s in "[0-9]{1,19}") {
            prop_assert_eq!(integer(&s), integer(&s));
        }

        #[test]
        fn zero_sequences_are_empty(len in 1usize..20) {
            prop_assert_eq!(integer(&"0".repeat(len)), "");
        }
    }
}
