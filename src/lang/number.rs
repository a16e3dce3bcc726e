//! Spectrum number encoding.
//!
//! Every numeric literal in a program line is followed by a marker byte and
//! five bytes holding its value. Small integers use the inline integer form,
//! everything else the floating point form: exponent byte biased by 128 and a
//! 32-bit mantissa whose implicit leading bit is dropped.
//!
//! Literals are read at single precision, so only the top 24 mantissa bits
//! can be set. Zero is written as five zero bytes.

/// Marker byte preceding the five value bytes.
pub const NUMBER_MARKER: u8 = 0x0E;

const EXPONENT_BIAS: i32 = 128;
const SIGN_FIX: f32 = 0.5;

/// Encode a decimal literal into the marker and floating point form.
pub fn encode_float(text: &str) -> [u8; 6] {
    encode_value(parse_float(text))
}

pub fn encode_value(f: f32) -> [u8; 6] {
    let mut out = [NUMBER_MARKER, 0, 0, 0, 0, 0];
    if f == 0.0 {
        return out;
    }
    let (mut m, e) = libm::frexpf(f);
    out[1] = (e + EXPONENT_BIAS) as u8;
    if m >= SIGN_FIX {
        m -= SIGN_FIX;
    }
    for byte in out[2..].iter_mut() {
        let mut bits: u8 = 0;
        for _ in 0..8 {
            bits <<= 1;
            m *= 2.0;
            if m >= 1.0 {
                m -= 1.0;
                bits |= 1;
            }
        }
        *byte = bits;
    }
    out
}

/// Encode an integer literal.
///
/// Values that do not fit 16 bits fall back to the floating point form.
pub fn encode_integer(value: u64) -> [u8; 6] {
    if value > u16::max_value() as u64 {
        return encode_value(value as f32);
    }
    let [lo, hi] = (value as u16).to_le_bytes();
    [NUMBER_MARKER, 0, 0, lo, hi, 0]
}

/// Parse the longest leading prefix of `text` that is a number, like `strtof`.
///
/// Text with no numeric prefix reads as zero.
pub fn parse_float(text: &str) -> f32 {
    let text = text.trim();
    let end = float_prefix_len(text.as_bytes());
    text[..end].parse::<f32>().unwrap_or(0.0)
}

fn float_prefix_len(b: &[u8]) -> usize {
    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();
    let mut end = digits(0);
    let mut mantissa = end;
    if b.get(end) == Some(&b'.') {
        let fraction = digits(end + 1);
        mantissa += fraction;
        end += 1 + fraction;
    }
    if mantissa == 0 {
        return 0;
    }
    if let Some(b'e') | Some(b'E') = b.get(end) {
        let mut exp = end + 1;
        if let Some(b'+') | Some(b'-') = b.get(exp) {
            exp += 1;
        }
        let n = digits(exp);
        if n > 0 {
            end = exp + n;
        }
    }
    end
}

/// Parse the leading digits of `text` valid in `radix`, like `strtol`.
///
/// Overflow saturates; text with no valid digit reads as zero.
pub fn parse_integer(text: &str, radix: u32) -> u64 {
    text.chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0u64, |acc, d| {
            acc.saturating_mul(radix as u64).saturating_add(d as u64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one() {
        assert_eq!(encode_float("1"), [0x0E, 0x81, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_half() {
        assert_eq!(encode_float("0.5"), [0x0E, 0x80, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(encode_float(".5"), [0x0E, 0x80, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_zero() {
        assert_eq!(encode_float("0.0"), [0x0E, 0, 0, 0, 0, 0]);
        assert_eq!(encode_float("."), [0x0E, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_fraction() {
        // 0.75 = 0.75 * 2^0, mantissa 0.25 after the sign fix
        assert_eq!(encode_float("0.75"), [0x0E, 0x80, 0x40, 0x00, 0x00, 0x00]);
        // 10 = 0.625 * 2^4
        assert_eq!(encode_float("10.0"), [0x0E, 0x84, 0x20, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_single_precision() {
        assert_eq!(encode_float("3.14159"), [0x0E, 0x82, 0x49, 0x0F, 0xD0, 0x00]);
        assert_eq!(encode_float("0.1"), [0x0E, 0x7D, 0x4C, 0xCC, 0xCD, 0x00]);
        assert_eq!(encode_float("0.001"), [0x0E, 0x77, 0x03, 0x12, 0x6F, 0x00]);
        assert_eq!(encode_float("1e10"), [0x0E, 0xA2, 0x15, 0x02, 0xF9, 0x00]);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(encode_float("1e3"), encode_value(1000.0));
        assert_eq!(encode_float("1E3"), encode_value(1000.0));
        assert_eq!(encode_float("2e"), encode_value(2.0));
    }

    #[test]
    fn test_integer() {
        assert_eq!(encode_integer(0), [0x0E, 0, 0, 0, 0, 0]);
        assert_eq!(encode_integer(10), [0x0E, 0, 0, 10, 0, 0]);
        assert_eq!(encode_integer(0x1234), [0x0E, 0, 0, 0x34, 0x12, 0]);
        assert_eq!(encode_integer(65535), [0x0E, 0, 0, 0xFF, 0xFF, 0]);
        assert_eq!(encode_integer(65536), encode_value(65536.0));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("101", 2), 5);
        assert_eq!(parse_integer("102", 2), 2);
        assert_eq!(parse_integer("1234", 10), 1234);
        assert_eq!(parse_integer("", 10), 0);
        assert_eq!(parse_integer("99999999999999999999999", 10), u64::max_value());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("3.5"), 3.5);
        assert_eq!(parse_float("3.5e"), 3.5);
        assert_eq!(parse_float("2e2"), 200.0);
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float("."), 0.0);
        assert_eq!(parse_float("1eeeeeeee"), 1.0);
        assert_eq!(parse_float("5."), 5.0);
    }
}
