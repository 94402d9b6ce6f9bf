//! Two-number calculator over `bignum::BigInt`.
//!
//! Reads two whitespace-delimited signed decimal numbers from stdin and
//! prints their sum, difference and product.

use std::io::{self, BufRead, Write};
use std::process;

use bignum::{BigInt, Error, Result};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut pending = Vec::new();

    let a = read_number(&mut lines, &mut pending, "Enter the first signed number: ")?;
    let b = read_number(&mut lines, &mut pending, "Enter the second signed number: ")?;

    println!("Addition: {}", a.checked_add(&b)?);
    println!("Subtraction: {}", a.checked_sub(&b)?);
    println!("Multiplication: {}", a.checked_mul(&b)?);
    Ok(())
}

/// Prompts for and returns the next whitespace-delimited token, parsed.
fn read_number<I>(lines: &mut I, pending: &mut Vec<String>, prompt: &str) -> Result<BigInt>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{}", prompt);
    io::stdout().flush()?;

    while pending.is_empty() {
        match lines.next() {
            Some(line) => pending.extend(line?.split_whitespace().map(String::from)),
            None => return Err(Error::EmptyInput),
        }
    }
    pending.remove(0).parse()
}
