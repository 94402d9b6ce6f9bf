//! Fixed-capacity signed decimal big integer arithmetic.
//!
//! This crate provides [`BigInt`], a sign-magnitude decimal integer backed by
//! a fixed-capacity digit array, together with exact addition, subtraction,
//! multiplication and magnitude comparison. Numbers live on the stack, hold
//! up to [`MAX_DIGITS`] decimal digits by default, and never allocate.
//!
//! # Parsing and printing
//!
//! A `BigInt` is built from a decimal literal with an optional leading `-`:
//!
//! ```
//! use bignum::BigInt;
//!
//! fn main() -> bignum::Result<()> {
//!     let a: BigInt = "123".parse()?;
//!     let b: BigInt = "-456".parse()?;
//!
//!     assert_eq!(bignum::to_string(&a), "123");
//!     assert_eq!(bignum::to_string(&b), "-456");
//!     Ok(())
//! }
//! ```
//!
//! The parser preserves the literal exactly, including leading zeros, so
//! `"007"` keeps three digits and prints back as `"007"`. Equality and
//! ordering still compare by value: `"007"` equals `"7"`.
//!
//! # Arithmetic
//!
//! The arithmetic operations are pure functions of their two operands. Each
//! returns `Result` because a result can require more digits than the
//! capacity holds:
//!
//! ```
//! use bignum::BigInt;
//!
//! fn main() -> bignum::Result<()> {
//!     let a: BigInt = "999".parse()?;
//!     let b: BigInt = "1".parse()?;
//!
//!     let sum = a.checked_add(&b)?;
//!     assert_eq!(bignum::to_string(&sum), "1000");
//!
//!     let product = a.checked_mul(&b)?;
//!     assert_eq!(bignum::to_string(&product), "999");
//!     Ok(())
//! }
//! ```
//!
//! Results of magnitude zero are normalized to a positive sign, so
//! subtracting a number from itself always yields the canonical `"0"`.
//!
//! # Capacity
//!
//! The digit capacity is a compile-time parameter. `BigInt` defaults to
//! [`MAX_DIGITS`] digits; `BigInt<64>` holds at most 64. A literal or an
//! arithmetic result that needs more digits fails with
//! [`Error::CapacityExceeded`] instead of truncating:
//!
//! ```
//! use bignum::Error;
//!
//! let err = bignum::from_str::<4>("123456").unwrap_err();
//! assert!(matches!(err, Error::CapacityExceeded { required: 6, capacity: 4 }));
//! ```

#![deny(missing_docs)]

pub use crate::bignum::{BigInt, Sign, MAX_DIGITS};
pub use crate::de::{from_slice, from_str};
pub use crate::error::{Category, Error, Result};
pub use crate::ser::{to_string, to_vec, to_writer};

mod bignum;
mod de;
mod error;
mod ops;
mod ser;
