//! Parsing `BigInt`s from decimal string literals.

use core::str::FromStr;

use crate::bignum::{BigInt, Sign};
use crate::error::{Error, Result};

/// Parses a `BigInt` from a decimal literal: an optional leading `-`
/// followed by one or more ASCII digits.
///
/// A leading `+` is not recognized. Leading zeros are kept, so `"007"`
/// parses into three digits and prints back unchanged.
///
/// # Errors
///
/// Fails with `Error::EmptyInput` when no digits follow the optional sign,
/// `Error::InvalidDigit` when a byte outside `0-9` appears in the digit
/// portion, and `Error::CapacityExceeded` when the literal has more digits
/// than the capacity holds.
///
/// ```
/// use bignum::BigInt;
///
/// let n: BigInt = bignum::from_str("-12345").unwrap();
/// assert_eq!(bignum::to_string(&n), "-12345");
/// ```
pub fn from_str<const CAP: usize>(s: &str) -> Result<BigInt<CAP>> {
    from_slice(s.as_bytes())
}

/// Parses a `BigInt` from bytes holding a decimal literal.
///
/// See [`from_str`] for the accepted syntax and the possible errors.
pub fn from_slice<const CAP: usize>(bytes: &[u8]) -> Result<BigInt<CAP>> {
    let (sign, digits) = match bytes.first() {
        Some(&b'-') => (Sign::Minus, &bytes[1..]),
        _ => (Sign::Plus, bytes),
    };

    if digits.is_empty() {
        return Err(Error::EmptyInput);
    }
    if digits.len() > CAP {
        return Err(Error::CapacityExceeded {
            required: digits.len(),
            capacity: CAP,
        });
    }

    let mut n = BigInt {
        digits: [0; CAP],
        length: digits.len(),
        sign,
    };
    // Column of the first digit, counting a consumed sign.
    let offset = bytes.len() - digits.len();
    for (i, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidDigit(byte, offset + i + 1));
        }
        // The literal reads most significant first; store the reverse.
        n.digits[digits.len() - 1 - i] = byte - b'0';
    }
    Ok(n)
}

impl<const CAP: usize> FromStr for BigInt<CAP> {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt<CAP>> {
        self::from_str(s)
    }
}
