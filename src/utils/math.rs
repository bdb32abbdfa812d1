use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10).pow(exp)
}

/// Quotient rounded toward positive infinity. `denominator` must be positive.
pub fn ceil_div(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_positive() {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_div() {
        let three = BigInt::from(3);
        assert_eq!(ceil_div(&BigInt::from(9), &three), BigInt::from(3));
        assert_eq!(ceil_div(&BigInt::from(10), &three), BigInt::from(4));
        assert_eq!(ceil_div(&BigInt::from(-10), &three), BigInt::from(-3));
        assert_eq!(ceil_div(&BigInt::from(0), &three), BigInt::from(0));
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(3), BigInt::from(1000));
    }
}
