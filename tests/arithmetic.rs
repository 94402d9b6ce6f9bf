use std::cmp::Ordering;

use bignum::BigInt;

fn n(literal: &str) -> BigInt {
    literal.parse().unwrap()
}

fn add(a: &str, b: &str) -> String {
    bignum::to_string(&n(a).checked_add(&n(b)).unwrap())
}

fn sub(a: &str, b: &str) -> String {
    bignum::to_string(&n(a).checked_sub(&n(b)).unwrap())
}

fn mul(a: &str, b: &str) -> String {
    bignum::to_string(&n(a).checked_mul(&n(b)).unwrap())
}

const FIXTURES: &[&str] = &[
    "0",
    "1",
    "-1",
    "7",
    "-7",
    "42",
    "999",
    "-999",
    "1000",
    "65536",
    "-65535",
    "123456789123456789",
    "-314159265358979323846",
    "99999999999999999999999999999999999999",
];

#[test]
fn addition() {
    assert_eq!(add("123", "456"), "579");
    assert_eq!(add("999", "1"), "1000");
    assert_eq!(add("0", "0"), "0");
    assert_eq!(add("-2", "-3"), "-5");
}

#[test]
fn addition_of_opposite_signs_delegates_to_subtraction() {
    assert_eq!(add("-5", "3"), "-2");
    assert_eq!(add("5", "-3"), "2");
    assert_eq!(add("3", "-5"), "-2");
    assert_eq!(add("-3", "5"), "2");
}

#[test]
fn subtraction() {
    assert_eq!(sub("456", "123"), "333");
    assert_eq!(sub("123", "456"), "-333");
    assert_eq!(sub("1000", "1"), "999");
    assert_eq!(sub("-5", "-3"), "-2");
    assert_eq!(sub("-3", "-5"), "2");
}

#[test]
fn subtraction_of_opposite_signs_delegates_to_addition() {
    assert_eq!(sub("-5", "3"), "-8");
    assert_eq!(sub("5", "-3"), "8");
}

#[test]
fn equal_operands_subtract_to_canonical_zero() {
    let zero = n("100").checked_sub(&n("100")).unwrap();
    assert_eq!(zero.digit_count(), 1);
    assert_eq!(zero.digits(), [0]);
    assert_eq!(bignum::to_string(&zero), "0");

    // No negative zero out of arithmetic.
    let zero = n("-5").checked_sub(&n("-5")).unwrap();
    assert!(!zero.is_negative());
    assert_eq!(bignum::to_string(&zero), "0");
}

#[test]
fn zero_operands_add_to_canonical_zero() {
    // Two negative zeros land in the same-sign path; the shared minus sign
    // must not survive on the zero sum.
    let zero = n("-0").checked_add(&n("-0")).unwrap();
    assert!(!zero.is_negative());
    assert_eq!(bignum::to_string(&zero), "0");

    // Mixed signs take the delegation path.
    let zero = n("0").checked_add(&n("-0")).unwrap();
    assert_eq!(bignum::to_string(&zero), "0");
    let zero = n("-000").checked_add(&n("000")).unwrap();
    assert_eq!(bignum::to_string(&zero), "0");
}

#[test]
fn multiplication() {
    assert_eq!(mul("12", "-3"), "-36");
    assert_eq!(mul("-12", "-3"), "36");
    assert_eq!(mul("999", "999"), "998001");
    assert_eq!(mul("1", "65536"), "65536");
}

#[test]
fn multiplication_by_zero_is_canonical_zero() {
    for &literal in FIXTURES {
        let product = n(literal).checked_mul(&BigInt::zero()).unwrap();
        assert_eq!(bignum::to_string(&product), "0", "{} * 0", literal);
        assert_eq!(product, BigInt::zero());
    }
}

#[test]
fn addition_is_commutative() {
    for &a in FIXTURES {
        for &b in FIXTURES {
            let ab = n(a).checked_add(&n(b)).unwrap();
            let ba = n(b).checked_add(&n(a)).unwrap();
            assert_eq!(ab, ba, "{} + {}", a, b);
        }
    }
}

#[test]
fn addition_is_associative() {
    for &a in FIXTURES {
        for &b in FIXTURES {
            for &c in FIXTURES {
                let left = n(a).checked_add(&n(b)).unwrap().checked_add(&n(c)).unwrap();
                let right = n(a).checked_add(&n(b).checked_add(&n(c)).unwrap()).unwrap();
                assert_eq!(left, right, "({} + {}) + {}", a, b, c);
            }
        }
    }
}

#[test]
fn multiplication_is_commutative() {
    for &a in FIXTURES {
        for &b in FIXTURES {
            let ab = n(a).checked_mul(&n(b)).unwrap();
            let ba = n(b).checked_mul(&n(a)).unwrap();
            assert_eq!(ab, ba, "{} * {}", a, b);
        }
    }
}

#[test]
fn add_then_subtract_round_trips() {
    for &a in FIXTURES {
        for &b in FIXTURES {
            let sum = n(a).checked_add(&n(b)).unwrap();
            let back = sum.checked_sub(&n(b)).unwrap();
            assert_eq!(back, n(a), "({} + {}) - {}", a, b, b);
        }
    }
}

#[test]
fn magnitude_comparison_ignores_sign() {
    assert_eq!(n("5").cmp_abs(&n("-5")), Ordering::Equal);
    assert_eq!(n("-10").cmp_abs(&n("9")), Ordering::Greater);
    assert_eq!(n("123").cmp_abs(&n("124")), Ordering::Less);
    assert_eq!(n("123").cmp_abs(&n("1230")), Ordering::Less);
}

#[test]
fn magnitude_comparison_ignores_leading_zeros() {
    assert_eq!(n("007").cmp_abs(&n("7")), Ordering::Equal);
    assert_eq!(n("007").cmp_abs(&n("70")), Ordering::Less);
    assert_eq!(n("070").cmp_abs(&n("8")), Ordering::Greater);
}

#[test]
fn signed_ordering() {
    assert!(n("-2") < n("1"));
    assert!(n("1") < n("2"));
    assert!(n("-3") < n("-2"));
    assert!(n("-0") <= n("0"));
    assert!(n("0") <= n("-0"));

    let mut values: Vec<BigInt> = ["3", "-1", "0", "-10", "2"].into_iter().map(n).collect();
    values.sort();
    let sorted: Vec<String> = values.iter().map(bignum::to_string).collect();
    assert_eq!(sorted, ["-10", "-1", "0", "2", "3"]);
}

#[test]
fn negation() {
    assert_eq!(bignum::to_string(&-n("5")), "-5");
    assert_eq!(bignum::to_string(&-n("-5")), "5");

    let zero: BigInt = BigInt::zero();
    assert_eq!(bignum::to_string(&-zero), "0");
}

#[test]
fn results_keep_operand_digit_widths() {
    // Addition does not strip the leading zeros an operand came with.
    assert_eq!(add("007", "1"), "008");
    // Subtraction canonicalizes.
    assert_eq!(sub("0100", "99"), "1");
}
