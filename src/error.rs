//! When parsing or arithmetic on a `BigInt` goes wrong.

use core::fmt::{self, Display};
use core::result;
use std::error;
use std::io;

/// This type represents all possible errors that can occur when parsing a
/// decimal literal or computing with `BigInt` values.
#[derive(Debug)]
pub enum Error {
    /// A byte outside `0-9` appeared in the digit portion of a literal.
    ///
    /// Holds the offending byte and its 1-based column in the input. Note
    /// that a leading `+` is not recognized and is reported as an invalid
    /// digit in column 1.
    InvalidDigit(u8, usize),

    /// A literal contained no digits after the optional sign.
    EmptyInput,

    /// A literal, or the result of an arithmetic operation, requires more
    /// digits than the capacity can hold.
    CapacityExceeded {
        /// Number of digits the value would need.
        required: usize,
        /// Number of digits the representation can hold.
        capacity: usize,
    },

    /// Some IO error occurred while writing a number to a writer.
    Io(io::Error),
}

/// Alias for a `Result` with the error type `bignum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - a literal that is not a valid decimal integer
    /// - `Category::Capacity` - a value that does not fit in the digit array
    /// - `Category::Io` - failure to write bytes on an IO stream
    pub fn classify(&self) -> Category {
        match *self {
            Error::InvalidDigit(..) | Error::EmptyInput => Category::Syntax,
            Error::CapacityExceeded { .. } => Category::Capacity,
            Error::Io(_) => Category::Io,
        }
    }

    /// Returns true if this error was caused by a literal that is not a
    /// valid decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a value requiring more
    /// digits than the capacity holds.
    pub fn is_capacity(&self) -> bool {
        self.classify() == Category::Capacity
    }

    /// Returns true if this error was caused by a failure to write bytes on
    /// an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }
}

/// Categorizes the cause of a `bignum::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a literal that is not a valid decimal
    /// integer: an empty digit portion or a byte outside `0-9`.
    Syntax,

    /// The error was caused by a literal or an arithmetic result that
    /// requires more digits than the capacity can hold.
    Capacity,

    /// The error was caused by a failure to write bytes on an IO stream.
    Io,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidDigit(byte, column) => {
                write!(f, "invalid digit `{}` at column {}", byte.escape_ascii(), column)
            }
            Error::EmptyInput => f.write_str("no digits in input"),
            Error::CapacityExceeded { required, capacity } => {
                write!(f, "number requires {} digits but capacity is {}", required, capacity)
            }
            Error::Io(ref err) => Display::fmt(err, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}
