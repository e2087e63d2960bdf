use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::EngineError;

/// Monetary amount represented as **integer centavos**.
///
/// Use this type for **all** monetary values in the engine (balances,
/// deposits, expense lines, budget ceilings) to avoid floating-point drift.
/// The wire side carries two-decimal numbers; conversion happens here.
///
/// # Examples
///
/// ```rust
/// use engine::Monto;
/// use rust_decimal::Decimal;
///
/// let monto = Monto::try_from(Decimal::new(15075, 2)).unwrap();
/// assert_eq!(monto.centavos(), 15075);
/// assert_eq!(monto.to_string(), "150.75");
/// ```
///
/// Amounts with more than two decimal places are rejected:
///
/// ```rust
/// use engine::Monto;
/// use rust_decimal::Decimal;
///
/// assert!(Monto::try_from(Decimal::new(12345, 3)).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Monto(i64);

impl Monto {
    pub const ZERO: Monto = Monto(0);

    /// Creates an amount from integer centavos.
    #[must_use]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Returns the raw value in centavos.
    #[must_use]
    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns the two-decimal wire representation.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Monto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let entero = abs / 100;
        let fraccion = abs % 100;
        write!(f, "{sign}{entero}.{fraccion:02}")
    }
}

impl From<i64> for Monto {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<Decimal> for Monto {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let normalized = value.normalize();
        if normalized.scale() > 2 {
            return Err(EngineError::Validation(
                "El monto admite como máximo dos decimales".to_string(),
            ));
        }
        (normalized * Decimal::ONE_HUNDRED)
            .to_i64()
            .map(Monto)
            .ok_or_else(|| EngineError::Validation("El monto está fuera de rango".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_two_decimal_values() {
        let monto = Monto::try_from(Decimal::new(1050, 2)).unwrap();
        assert_eq!(monto.centavos(), 1050);
        assert_eq!(monto.to_decimal(), Decimal::new(1050, 2));
    }

    #[test]
    fn accepts_integers_and_one_decimal() {
        assert_eq!(Monto::try_from(Decimal::from(10)).unwrap().centavos(), 1000);
        assert_eq!(
            Monto::try_from(Decimal::new(105, 1)).unwrap().centavos(),
            1050
        );
    }

    #[test]
    fn trailing_zeros_do_not_count_as_extra_decimals() {
        // 2.50 normalizes to 2.5 before the scale check.
        assert_eq!(
            Monto::try_from(Decimal::new(2500, 3)).unwrap().centavos(),
            250
        );
    }

    #[test]
    fn rejects_three_decimals() {
        assert!(matches!(
            Monto::try_from(Decimal::new(1005, 3)),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(Monto::from_centavos(15075).to_string(), "150.75");
        assert_eq!(Monto::from_centavos(500).to_string(), "5.00");
        assert_eq!(Monto::from_centavos(-42).to_string(), "-0.42");
    }
}
