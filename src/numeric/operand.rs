// ============================================================================
// Operand
// Signed 32-bit integer input to an arithmetic operation
// ============================================================================

use super::errors::{CalcError, CalcResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two integer inputs to an operation.
///
/// Internally an `i32`, matching the native `Int` width of the platform the
/// calculator was first shipped on. All arithmetic wraps on overflow.
///
/// # Example
/// ```
/// use int_calculator::numeric::Operand;
///
/// let a: Operand = "20".parse().unwrap();
/// let b = Operand::new(4);
/// assert_eq!(a.checked_div(b).unwrap(), Operand::new(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Operand(i32);

impl Operand {
    /// Zero
    pub const ZERO: Self = Self(0);

    /// One
    pub const ONE: Self = Self(1);

    /// Maximum representable value
    pub const MAX: Self = Self(i32::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i32::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Strict base-10 parse.
    ///
    /// Accepts an optional leading `+` or `-` followed by ASCII digits.
    /// Whitespace is not stripped.
    ///
    /// # Errors
    /// Returns `InvalidInput` for empty text, a lone sign, any other
    /// character, or a value outside the `i32` range.
    pub fn parse(text: &str) -> CalcResult<Self> {
        text.parse::<i32>()
            .map(Self)
            .map_err(|_| CalcError::invalid_input(text))
    }

    /// Like [`Operand::parse`], but ignores leading and trailing whitespace.
    pub fn parse_trimmed(text: &str) -> CalcResult<Self> {
        text.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| CalcError::invalid_input(text))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Two's-complement addition.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Two's-complement subtraction.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Two's-complement multiplication.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Two's-complement negation (`MIN` negates to itself).
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Division truncated toward zero.
    ///
    /// `MIN / -1` wraps to `MIN`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero. Nothing is computed.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> CalcResult<Self> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self(self.0.wrapping_div(rhs.0)))
    }

    /// Remainder of truncating division; takes the sign of `self`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> CalcResult<Self> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self(self.0.wrapping_rem(rhs.0)))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<i32> for Operand {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Operand> for i32 {
    #[inline]
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl std::str::FromStr for Operand {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_constants() {
        assert_eq!(Operand::ZERO.value(), 0);
        assert_eq!(Operand::ONE.value(), 1);
        assert_eq!(Operand::MAX.value(), i32::MAX);
        assert_eq!(Operand::MIN.value(), i32::MIN);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Operand::parse("42").unwrap().value(), 42);
        assert_eq!(Operand::parse("-17").unwrap().value(), -17);
        assert_eq!(Operand::parse("+8").unwrap().value(), 8);
        assert_eq!(Operand::parse("007").unwrap().value(), 7);
        assert_eq!(Operand::parse("2147483647").unwrap(), Operand::MAX);
        assert_eq!(Operand::parse("-2147483648").unwrap(), Operand::MIN);
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "abc", "-", "+", "1.5", "12a", "0x10", "1e3", "2147483648", " 5", "5 "] {
            let err = Operand::parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {text:?}");
            assert_eq!(err, CalcError::invalid_input(text));
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        for text in ["٣", "١٢", "５"] {
            assert_eq!(Operand::parse(text), Err(CalcError::invalid_input(text)));
        }
    }

    #[test]
    fn test_parse_trimmed() {
        assert_eq!(Operand::parse_trimmed("  12\n").unwrap().value(), 12);
        assert_eq!(
            Operand::parse_trimmed("   "),
            Err(CalcError::invalid_input("   "))
        );
    }

    #[test]
    fn test_from_str() {
        let x: Operand = "-300".parse().unwrap();
        assert_eq!(x.value(), -300);
        assert!(x.is_negative());

        let bad: Result<Operand, _> = "ten".parse();
        assert_eq!(bad, Err(CalcError::invalid_input("ten")));
    }

    #[test]
    fn test_wrapping_arithmetic() {
        assert_eq!(Operand::MAX.wrapping_add(Operand::ONE), Operand::MIN);
        assert_eq!(Operand::MIN.wrapping_sub(Operand::ONE), Operand::MAX);
        assert_eq!(
            Operand::new(65536).wrapping_mul(Operand::new(65536)),
            Operand::ZERO
        );
        assert_eq!(Operand::MIN.wrapping_neg(), Operand::MIN);
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(
            Operand::new(7).checked_div(Operand::new(2)).unwrap().value(),
            3
        );
        assert_eq!(
            Operand::new(-7).checked_div(Operand::new(2)).unwrap().value(),
            -3
        );
        assert_eq!(
            Operand::MIN.checked_div(Operand::new(-1)).unwrap(),
            Operand::MIN
        );
        assert_eq!(
            Operand::new(5).checked_div(Operand::ZERO),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_rem() {
        assert_eq!(
            Operand::new(-7).checked_rem(Operand::new(2)).unwrap().value(),
            -1
        );
        assert_eq!(
            Operand::new(7).checked_rem(Operand::new(-2)).unwrap().value(),
            1
        );
        assert_eq!(
            Operand::new(1).checked_rem(Operand::ZERO),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::new(-42).to_string(), "-42");
        assert_eq!(Operand::ZERO.to_string(), "0");
    }

    #[test]
    fn test_conversions() {
        let x = Operand::from(9);
        let raw: i32 = x.into();
        assert_eq!(raw, 9);
    }
}
