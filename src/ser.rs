//! Printing `BigInt`s as decimal strings.

use core::fmt::{self, Display};
use std::io;

use crate::bignum::{BigInt, Sign};
use crate::error::Result;

/// Writes `value` into `writer` as a decimal string: `-` if the stored sign
/// is negative, then the digits from most significant to least significant.
///
/// The stored digits are reproduced exactly, so a value parsed from `"007"`
/// writes back as `007` and one parsed from `"-0"` as `-0`. Arithmetic
/// results never carry a negative sign on a zero magnitude.
///
/// # Errors
///
/// Fails with `Error::Io` if the writer fails.
pub fn to_writer<W, const CAP: usize>(mut writer: W, value: &BigInt<CAP>) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(&to_vec(value))?;
    Ok(())
}

/// Renders `value` as a decimal string in a byte vector.
pub fn to_vec<const CAP: usize>(value: &BigInt<CAP>) -> Vec<u8> {
    let mut vec = Vec::with_capacity(value.digit_count() + 1);
    if value.sign() == Sign::Minus {
        vec.push(b'-');
    }
    for &digit in value.digits().iter().rev() {
        vec.push(digit + b'0');
    }
    vec
}

/// Renders `value` as a decimal `String`.
///
/// ```
/// use bignum::BigInt;
///
/// let n: BigInt = "-42".parse().unwrap();
/// assert_eq!(bignum::to_string(&n), "-42");
/// ```
pub fn to_string<const CAP: usize>(value: &BigInt<CAP>) -> String {
    let mut string = String::with_capacity(value.digit_count() + 1);
    if value.sign() == Sign::Minus {
        string.push('-');
    }
    for &digit in value.digits().iter().rev() {
        string.push(char::from(digit + b'0'));
    }
    string
}

impl<const CAP: usize> Display for BigInt<CAP> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&to_string(self))
    }
}
