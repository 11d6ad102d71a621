//! Hand-rolled UTF-8 codec.
//!
//! Text fields in the wire format are UTF-8; the codec here is implemented
//! from the bit-packing rules directly rather than through
//! `std::str::from_utf8`, so that validation behavior is pinned by this
//! crate and not by whatever the platform's validator happens to do.
//!
//! Decoding validates in a fixed order for every sequence: leading-byte
//! shape first, then truncation, then each continuation byte's top bits.
//! Code points at or above U+10000 additionally pass through explicit
//! UTF-16 surrogate-pair math, which is what rejects encoded surrogate
//! halves and anything past U+10FFFF. Overlong encodings are accepted as
//! written.

use crate::error::Utf8Error;

/// Decode a UTF-8 byte sequence into a string.
///
/// Fails with a malformed-input error on a bad leading byte, a bad
/// continuation byte, or a sequence truncated at the end of input. There is
/// no best-effort substitution: the first malformed byte aborts the decode.
pub fn decode_utf8(src: &[u8]) -> Result<String, Utf8Error> {
    let len = src.len();
    let mut dst = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        let start = i;
        let a = src[i];
        i += 1;

        let cp: u32 = if a & 0b1000_0000 == 0 {
            u32::from(a)
        } else if a & 0b1110_0000 == 0b1100_0000 {
            if i + 1 > len {
                return Err(Utf8Error::Truncated { offset: start });
            }
            let b = src[i];
            i += 1;
            check_continuation(b, i - 1)?;
            (u32::from(a & 0b0001_1111) << 6) | u32::from(b & 0b0011_1111)
        } else if a & 0b1111_0000 == 0b1110_0000 {
            if i + 2 > len {
                return Err(Utf8Error::Truncated { offset: start });
            }
            let b = src[i];
            let c = src[i + 1];
            i += 2;
            check_continuation(b, i - 2)?;
            check_continuation(c, i - 1)?;
            (u32::from(a & 0b0000_1111) << 12)
                | (u32::from(b & 0b0011_1111) << 6)
                | u32::from(c & 0b0011_1111)
        } else if a & 0b1111_1000 == 0b1111_0000 {
            if i + 3 > len {
                return Err(Utf8Error::Truncated { offset: start });
            }
            let b = src[i];
            let c = src[i + 1];
            let d = src[i + 2];
            i += 3;
            check_continuation(b, i - 3)?;
            check_continuation(c, i - 2)?;
            check_continuation(d, i - 1)?;
            (u32::from(a & 0b0000_0111) << 18)
                | (u32::from(b & 0b0011_1111) << 12)
                | (u32::from(c & 0b0011_1111) << 6)
                | u32::from(d & 0b0011_1111)
        } else {
            return Err(Utf8Error::InvalidLeadByte {
                byte: a,
                offset: start,
            });
        };

        push_code_point(&mut dst, cp, start)?;
    }

    Ok(dst)
}

fn check_continuation(byte: u8, offset: usize) -> Result<(), Utf8Error> {
    if byte & 0b1100_0000 != 0b1000_0000 {
        return Err(Utf8Error::InvalidContinuation { byte, offset });
    }
    Ok(())
}

/// Append one decoded code point, routing supplementary-plane values
/// through explicit surrogate-pair math.
fn push_code_point(dst: &mut String, cp: u32, offset: usize) -> Result<(), Utf8Error> {
    let err = Utf8Error::CodePointOutOfRange { value: cp, offset };

    if cp <= 0xd7ff || (0xe000..=0xffff).contains(&cp) {
        dst.push(char::from_u32(cp).ok_or(err)?);
        return Ok(());
    }

    // Split into a UTF-16 surrogate pair from cp - 0x10000. An encoded
    // surrogate half underflows the subtraction; anything past U+10FFFF
    // pushes the high half out of 0xd800..=0xdbff.
    let v = cp.checked_sub(0x1_0000).ok_or(err)?;
    let hi = (v >> 10) + 0xd800;
    let lo = (v & 0x3ff) + 0xdc00;
    if !(0xd800..=0xdbff).contains(&hi) || !(0xdc00..=0xdfff).contains(&lo) {
        return Err(err);
    }

    let recombined = 0x1_0000 + ((hi - 0xd800) << 10) + (lo - 0xdc00);
    dst.push(char::from_u32(recombined).ok_or(err)?);
    Ok(())
}

/// Encode a string into UTF-8 bytes, 1-4 bytes per code point.
///
/// The working buffer is sized generously (4 bytes per input code unit);
/// only the used prefix is returned, so callers must not assume the
/// vector's capacity matches its length.
pub fn encode_utf8(src: &str) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len() * 4);

    for c in src.chars() {
        let cp = c as u32;
        if cp <= 0x7f {
            dst.push(cp as u8);
        } else if cp <= 0x7ff {
            dst.push(0b1100_0000 | ((cp >> 6) as u8));
            dst.push(0b1000_0000 | ((cp & 0x3f) as u8));
        } else if cp <= 0xffff {
            dst.push(0b1110_0000 | ((cp >> 12) as u8));
            dst.push(0b1000_0000 | (((cp >> 6) & 0x3f) as u8));
            dst.push(0b1000_0000 | ((cp & 0x3f) as u8));
        } else {
            dst.push(0b1111_0000 | ((cp >> 18) as u8));
            dst.push(0b1000_0000 | (((cp >> 12) & 0x3f) as u8));
            dst.push(0b1000_0000 | (((cp >> 6) & 0x3f) as u8));
            dst.push(0b1000_0000 | ((cp & 0x3f) as u8));
        }
    }

    dst
}
