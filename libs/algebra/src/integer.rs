//! Integer utilities.

use crate::error::{Error, Result};

/// Counts the digits of `value` written in base `radix`.
///
/// The sign is not counted, and zero has one digit.
///
/// # Examples
///
/// ```
/// use calcda_algebra::integer::count_digits;
///
/// assert_eq!(count_digits(0, 10).unwrap(), 1);
/// assert_eq!(count_digits(-12345, 10).unwrap(), 5);
/// assert_eq!(count_digits(255, 16).unwrap(), 2);
/// assert!(count_digits(1, 1).is_err());
/// ```
pub fn count_digits(value: i64, radix: u32) -> Result<usize> {
    if radix < 2 {
        tracing::debug!(radix, "rejecting radix below 2");
        return Err(Error::InvalidRadix(radix));
    }
    let radix = i64::from(radix);
    let mut value = value;
    let mut digits = 0;
    loop {
        value /= radix;
        digits += 1;
        if value == 0 {
            break;
        }
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn decimal_digits() {
        assert_eq!(count_digits(9, 10), Ok(1));
        assert_eq!(count_digits(10, 10), Ok(2));
        assert_eq!(count_digits(-999, 10), Ok(3));
        assert_eq!(count_digits(i64::MAX, 10), Ok(19));
        assert_eq!(count_digits(i64::MIN, 10), Ok(19));
    }

    #[test]
    fn binary_digits() {
        assert_eq!(count_digits(1, 2), Ok(1));
        assert_eq!(count_digits(8, 2), Ok(4));
        assert_eq!(count_digits(-1, 2), Ok(1));
    }

    #[test]
    fn degenerate_radix_is_rejected() {
        assert_eq!(count_digits(100, 0), Err(Error::InvalidRadix(0)));
        assert_eq!(count_digits(100, 1), Err(Error::InvalidRadix(1)));
    }
}
