// ============================================================================
// Thai Lexicon
// Digit and positional unit words
// ============================================================================

/// Generic digit words indexed by digit value.
pub const DIGIT_WORDS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Unit words indexed by position from the right within a six-digit group.
pub const UNIT_WORDS: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// Ones-word for a trailing 1 in a multi-digit number.
pub const ONES_ED: &str = "เอ็ด";

/// Tens-position replacement for 2.
pub const TWENTY_YI: &str = "ยี่";

pub const MILLION: &str = "ล้าน";
pub const ZERO: &str = "ศูนย์";
pub const BAHT: &str = "บาท";
pub const EXACT: &str = "ถ้วน";
pub const SATANG: &str = "สตางค์";

#[inline]
pub fn digit_word(digit: u8) -> &'static str {
    DIGIT_WORDS[usize::from(digit)]
}

#[inline]
pub fn unit_word(position: usize) -> &'static str {
    UNIT_WORDS[position]
}
