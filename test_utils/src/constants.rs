/// Korean sample text with a known character distribution.
///
/// After cleaning: 가 x4, 나 x3, 다 x3, 라 x2, 마 x1, 바 x1, 사 x1.
pub const HANGUL_SAMPLE: &str = "가가 나나.\n가 다다 라\t나 가 다.\n라 마 바 사.";

/// Text that is empty once whitespace and periods are removed.
pub const BLANK_SAMPLE: &str = " .\n\t. \r\n...  ";

/// Bytes that are not valid CP949 (lead byte without a trail byte).
pub const INVALID_CP949_BYTES: &[u8] = &[0xB0, 0xA1, 0xFF, 0x41, 0x81];
