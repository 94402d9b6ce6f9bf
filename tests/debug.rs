use bignum::{BigInt, Sign};

#[test]
fn bigint() {
    let n: BigInt = "-123".parse().unwrap();
    assert_eq!(format!("{:?}", n), "BigInt(-123)");

    let zero: BigInt = BigInt::zero();
    assert_eq!(format!("{:?}", zero), "BigInt(0)");

    let n: BigInt = "007".parse().unwrap();
    assert_eq!(format!("{:?}", n), "BigInt(007)");
}

#[test]
fn sign() {
    assert_eq!(format!("{:?}", Sign::Minus), "Minus");
    assert_eq!(format!("{:?}", Sign::Plus), "Plus");
}

#[test]
fn error() {
    let err = "12x".parse::<BigInt>().unwrap_err();
    assert_eq!(format!("{}", err), "invalid digit `x` at column 3");

    let err = "".parse::<BigInt>().unwrap_err();
    assert_eq!(format!("{}", err), "no digits in input");
}
