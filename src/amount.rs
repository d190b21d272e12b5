use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

/// Represents an amount of money.
///
/// The [`Display`] implementation formats it to 2 decimal places, with the
/// whole part grouped in thousands (`1,234,567.89`). Width and alignment flags
/// apply to the formatted text as a whole.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let mut grouped = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
        if self.0 < 0.0 && fixed != "0.00" {
            grouped.push('-');
        }
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if !fraction.is_empty() {
            grouped.push('.');
            grouped.push_str(fraction);
        }
        f.pad(&grouped)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Amount {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * f64::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fn_groups_thousands_with_two_decimals() {
        assert_eq!(Amount::new(0.0).to_string(), "0.00");
        assert_eq!(Amount::new(35.0).to_string(), "35.00");
        assert_eq!(Amount::new(999.999).to_string(), "1,000.00");
        assert_eq!(Amount::new(1_234_567.891).to_string(), "1,234,567.89");
        assert_eq!(Amount::new(123_456.5).to_string(), "123,456.50");
    }

    #[test]
    fn display_fn_keeps_sign_of_negative_amounts() {
        assert_eq!(Amount::new(-1234.5).to_string(), "-1,234.50");
        assert_eq!(Amount::new(-0.001).to_string(), "0.00");
    }

    #[test]
    fn display_fn_respects_width() {
        assert_eq!(format!("{:>10}", Amount::new(1000.0)), "  1,000.00");
    }

    #[test]
    fn mul_fn_scales_by_quantity() {
        let mut total = Amount::default();
        total += Amount::new(2.5) * 2;
        total += Amount::new(10.0) * 3;
        assert_eq!(total, Amount::new(35.0));
    }
}
