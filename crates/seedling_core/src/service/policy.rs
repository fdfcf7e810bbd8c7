//! Value rules applied by item services.

use crate::model::item::ItemValidationError;

/// Numeric rule enforced on `Item::value` at creation time.
///
/// The non-negative rule belongs to the example domain, not to the entity
/// shape, so callers can relax it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Reject values below zero.
    #[default]
    NonNegative,
    /// Accept every `i64`.
    AnyInteger,
}

impl ValuePolicy {
    pub fn check(self, value: i64) -> Result<(), ItemValidationError> {
        match self {
            Self::NonNegative if value < 0 => Err(ItemValidationError::NegativeValue(value)),
            _ => Ok(()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonNegative => "non_negative",
            Self::AnyInteger => "any_integer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValuePolicy;
    use crate::model::item::ItemValidationError;

    #[test]
    fn non_negative_is_default_and_rejects_below_zero() {
        let policy = ValuePolicy::default();
        assert_eq!(policy, ValuePolicy::NonNegative);
        assert!(policy.check(0).is_ok());
        assert_eq!(
            policy.check(-1),
            Err(ItemValidationError::NegativeValue(-1))
        );
    }

    #[test]
    fn any_integer_accepts_extremes() {
        assert!(ValuePolicy::AnyInteger.check(i64::MIN).is_ok());
        assert!(ValuePolicy::AnyInteger.check(i64::MAX).is_ok());
    }
}
