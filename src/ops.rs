//! The arithmetic engine: schoolbook addition, subtraction and
//! multiplication over the fixed-capacity digit representation.
//!
//! Addition and subtraction delegate to each other for operands of opposite
//! signs. The delegated call flips the second operand's sign, so it always
//! lands in the equal-sign case and the mutual recursion is at most one hop
//! deep.

use core::cmp::Ordering;
use core::ops::Neg;

use crate::bignum::{BigInt, Sign};
use crate::error::{Error, Result};

impl<const CAP: usize> BigInt<CAP> {
    /// Computes `self + other`.
    ///
    /// A zero result is always positive.
    ///
    /// # Errors
    ///
    /// Fails with `Error::CapacityExceeded` when the sum needs more digits
    /// than the capacity holds.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let a: BigInt = "123".parse().unwrap();
    /// let b: BigInt = "456".parse().unwrap();
    /// assert_eq!(bignum::to_string(&a.checked_add(&b).unwrap()), "579");
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if self.sign != other.sign {
            return self.checked_sub(&other.with_opposite_sign());
        }

        let mut result = BigInt {
            digits: [0; CAP],
            length: 0,
            sign: self.sign,
        };
        let mut carry = 0;
        let mut i = 0;
        while i < self.length || i < other.length || carry != 0 {
            if i >= CAP {
                return Err(Error::CapacityExceeded {
                    required: i + 1,
                    capacity: CAP,
                });
            }
            let digit_a = if i < self.length { self.digits[i] } else { 0 };
            let digit_b = if i < other.length { other.digits[i] } else { 0 };
            let sum = digit_a + digit_b + carry;
            result.digits[i] = sum % 10;
            carry = sum / 10;
            i += 1;
        }
        result.length = i;
        if result.is_zero() {
            result.sign = Sign::Plus;
        }
        Ok(result)
    }

    /// Computes `self - other`.
    ///
    /// The result takes the sign of `self`, flipped when `other` has the
    /// larger magnitude. A zero result is always positive.
    ///
    /// # Errors
    ///
    /// Subtraction of equal-signed operands cannot overflow; opposite signs
    /// delegate to [`checked_add`](BigInt::checked_add), which can fail with
    /// `Error::CapacityExceeded`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        if self.sign != other.sign {
            return self.checked_add(&other.with_opposite_sign());
        }

        let mut sign = self.sign;
        let (larger, smaller) = match self.cmp_abs(other) {
            Ordering::Less => {
                sign = sign.opposite();
                (other, self)
            }
            _ => (self, other),
        };

        let mut result = BigInt {
            digits: [0; CAP],
            length: larger.length,
            sign,
        };
        let mut borrow = 0i8;
        for i in 0..larger.length {
            let digit_l = larger.digits[i] as i8;
            // Digits of the smaller operand past its length act as zeros.
            let digit_s = if i < smaller.length {
                smaller.digits[i] as i8
            } else {
                0
            };
            let mut diff = digit_l - digit_s - borrow;
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.digits[i] = diff as u8;
        }

        result.trim_leading_zeros();
        if result.is_zero() {
            result.sign = Sign::Plus;
        }
        Ok(result)
    }

    /// Computes `self * other` by schoolbook convolution.
    ///
    /// The result sign is the product of the operand signs; a zero result is
    /// always positive.
    ///
    /// # Errors
    ///
    /// Fails with `Error::CapacityExceeded` when the combined digit count of
    /// the operands exceeds the capacity, since the product can need up to
    /// that many digits.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let full_length = self.length + other.length;
        if full_length > CAP {
            return Err(Error::CapacityExceeded {
                required: full_length,
                capacity: CAP,
            });
        }

        let mut result = BigInt {
            digits: [0; CAP],
            length: full_length,
            sign: self.sign * other.sign,
        };
        for i in 0..self.length {
            let mut carry = 0u16;
            let mut j = 0;
            // Keep going past the last digit of `other` until the row's
            // carry is flushed.
            while j < other.length || carry != 0 {
                if i + j >= CAP {
                    return Err(Error::CapacityExceeded {
                        required: i + j + 1,
                        capacity: CAP,
                    });
                }
                let digit_b = if j < other.length { other.digits[j] } else { 0 };
                let current = u16::from(result.digits[i + j])
                    + u16::from(self.digits[i]) * u16::from(digit_b)
                    + carry;
                result.digits[i + j] = (current % 10) as u8;
                carry = current / 10;
                j += 1;
            }
        }

        result.trim_leading_zeros();
        if result.is_zero() {
            result.sign = Sign::Plus;
        }
        Ok(result)
    }

    /// Copy of `self` with the sign flipped, zero included. Used for the
    /// add/sub delegation, where the sign of a zero operand is moot.
    pub(crate) fn with_opposite_sign(&self) -> Self {
        let mut n = *self;
        n.sign = n.sign.opposite();
        n
    }
}

impl<const CAP: usize> Neg for BigInt<CAP> {
    type Output = BigInt<CAP>;

    /// Flips the sign. Zero stays positive.
    fn neg(self) -> BigInt<CAP> {
        if self.is_zero() {
            let mut n = self;
            n.sign = Sign::Plus;
            n
        } else {
            self.with_opposite_sign()
        }
    }
}
