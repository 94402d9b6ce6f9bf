//! The `BigInt` representation: a sign and a fixed-capacity array of decimal
//! digits, least significant first.

use core::cmp::Ordering;
use core::fmt;

use num_traits::{FromPrimitive, ToPrimitive};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default number of decimal digits a [`BigInt`] can hold.
pub const MAX_DIGITS: usize = 310;

/// Sign of a [`BigInt`].
///
/// `Minus` orders before `Plus`, matching the order of the values they tag.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Sign {
    /// The number is negative.
    Minus,
    /// The number is zero or positive.
    Plus,
}

impl Sign {
    /// The opposite sign.
    pub fn opposite(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl core::ops::Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl core::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.opposite()
    }
}

/// A signed decimal integer with a fixed digit capacity.
///
/// The magnitude is stored as base-10 digits, least significant first, in a
/// stack-resident array of `CAP` bytes. `CAP` defaults to [`MAX_DIGITS`].
///
/// Values are immutable: the arithmetic operations read their two operands
/// and return a fresh result. A literal parses into exactly as many digits
/// as it was written with, so `"007"` keeps three digits; equality and
/// ordering nevertheless compare by numeric value.
#[derive(Copy, Clone)]
pub struct BigInt<const CAP: usize = MAX_DIGITS> {
    pub(crate) digits: [u8; CAP],
    pub(crate) length: usize,
    pub(crate) sign: Sign,
}

impl<const CAP: usize> BigInt<CAP> {
    /// The canonical zero: a single `0` digit with a positive sign.
    pub fn zero() -> Self {
        BigInt {
            digits: [0; CAP],
            length: 1,
            sign: Sign::Plus,
        }
    }

    /// Number of digits in use, including any leading zeros the value was
    /// parsed with.
    pub fn digit_count(&self) -> usize {
        self.length
    }

    /// Number of digits the representation can hold.
    pub fn capacity(&self) -> usize {
        CAP
    }

    /// The sign this value is tagged with.
    ///
    /// A zero parsed from `"-0"` reports `Sign::Minus` here; use
    /// [`is_negative`](BigInt::is_negative) for the sign of the numeric
    /// value.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The digits in use, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.length]
    }

    /// Returns true if this value is zero, regardless of sign or digit
    /// count.
    pub fn is_zero(&self) -> bool {
        self.digits[..self.length].iter().all(|&d| d == 0)
    }

    /// Returns true if this value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus && !self.is_zero()
    }

    /// Returns true if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// Compares the magnitudes of two numbers, ignoring both signs.
    ///
    /// Leading zeros do not participate: `"007"` and `"7"` compare equal,
    /// and `"007"` is less than `"70"`.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        let len_a = self.significant_length();
        let len_b = other.significant_length();
        if len_a != len_b {
            return len_a.cmp(&len_b);
        }
        for i in (0..len_a).rev() {
            if self.digits[i] != other.digits[i] {
                return self.digits[i].cmp(&other.digits[i]);
            }
        }
        Ordering::Equal
    }

    /// Digit count with leading zeros skipped, never less than 1.
    pub(crate) fn significant_length(&self) -> usize {
        let mut len = self.length;
        while len > 1 && self.digits[len - 1] == 0 {
            len -= 1;
        }
        len
    }

    /// Drops leading (most significant) zero digits down to a minimum
    /// length of 1.
    pub(crate) fn trim_leading_zeros(&mut self) {
        self.length = self.significant_length();
    }

    /// Sign of the numeric value: `Plus` for zero whatever the stored sign.
    pub(crate) fn value_sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Plus
        } else {
            self.sign
        }
    }

    /// Magnitude as a u64, if it fits.
    fn abs_to_u64(&self) -> Option<u64> {
        let mut acc: u64 = 0;
        for &digit in self.digits[..self.significant_length()].iter().rev() {
            acc = acc.checked_mul(10)?.checked_add(u64::from(digit))?;
        }
        Some(acc)
    }
}

impl<const CAP: usize> PartialEq for BigInt<CAP> {
    fn eq(&self, other: &Self) -> bool {
        self.value_sign() == other.value_sign() && self.cmp_abs(other) == Ordering::Equal
    }
}

impl<const CAP: usize> Eq for BigInt<CAP> {}

impl<const CAP: usize> Ord for BigInt<CAP> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value_sign(), other.value_sign()) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.cmp_abs(other),
            (Sign::Minus, Sign::Minus) => other.cmp_abs(self),
        }
    }
}

impl<const CAP: usize> PartialOrd for BigInt<CAP> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const CAP: usize> fmt::Debug for BigInt<CAP> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}

impl BigInt {
    /// Builds a number from the ASCII output of `itoa`. The digit count of
    /// any primitive integer is far below `MAX_DIGITS`, so this cannot
    /// overflow the array.
    fn from_decimal_ascii(bytes: &[u8]) -> BigInt {
        let mut n = BigInt::zero();
        let digits = match bytes.first() {
            Some(&b'-') => {
                n.sign = Sign::Minus;
                &bytes[1..]
            }
            _ => bytes,
        };
        n.length = digits.len();
        for (i, &byte) in digits.iter().rev().enumerate() {
            n.digits[i] = byte - b'0';
        }
        n
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(primitive: $ty) -> BigInt {
                    let mut buf = itoa::Buffer::new();
                    BigInt::from_decimal_ascii(buf.format(primitive).as_bytes())
                }
            }
        )*
    };
}

impl_from_primitive!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

impl<const CAP: usize> ToPrimitive for BigInt<CAP> {
    fn to_i64(&self) -> Option<i64> {
        let magnitude = self.abs_to_u64()?;
        match self.value_sign() {
            Sign::Plus => i64::try_from(magnitude).ok(),
            Sign::Minus => 0i64.checked_sub_unsigned(magnitude),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.value_sign() {
            Sign::Plus => self.abs_to_u64(),
            Sign::Minus => None,
        }
    }
}

impl<const CAP: usize> Serialize for BigInt<CAP> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor<const CAP: usize>;

impl<'de, const CAP: usize> Visitor<'de> for BigIntVisitor<CAP> {
    type Value = BigInt<CAP>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt<CAP>, E>
    where
        E: de::Error,
    {
        crate::de::from_str(value).map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt<CAP>, E>
    where
        E: de::Error,
    {
        let mut buf = itoa::Buffer::new();
        crate::de::from_str(buf.format(value)).map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt<CAP>, E>
    where
        E: de::Error,
    {
        let mut buf = itoa::Buffer::new();
        crate::de::from_str(buf.format(value)).map_err(de::Error::custom)
    }
}

impl<'de, const CAP: usize> Deserialize<'de> for BigInt<CAP> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt<CAP>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
