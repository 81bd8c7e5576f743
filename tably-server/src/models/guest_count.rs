//! Party size validation

use super::ValidationError;

/// Minimum party size for a reservation
const MIN_GUESTS: i32 = 1;

/// Validated party size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GuestCount(i32);

impl GuestCount {
    /// Create a party size, rejecting anything below one guest.
    ///
    /// # Example
    /// ```
    /// use tably_server::models::GuestCount;
    ///
    /// assert!(GuestCount::new(1).is_ok());
    /// assert!(GuestCount::new(0).is_err());
    /// ```
    pub fn new(val: i32) -> Result<Self, ValidationError> {
        if val < MIN_GUESTS {
            return Err(ValidationError::GuestCountTooSmall { given: val });
        }

        Ok(Self(val))
    }

    /// Rebuild from a stored column value. Values were validated on the
    /// way in; storage reads skip re-validation.
    pub(crate) fn from_stored(val: i32) -> Self {
        Self(val)
    }

    /// Get the party size as a plain integer.
    pub fn get(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_guest_is_the_floor() {
        assert!(GuestCount::new(1).is_ok());
        assert_eq!(GuestCount::new(4).unwrap().get(), 4);
    }

    #[test]
    fn rejects_zero() {
        let err = GuestCount::new(0).unwrap_err();
        assert!(matches!(err, ValidationError::GuestCountTooSmall { given: 0 }));
    }

    #[test]
    fn rejects_negative() {
        assert!(GuestCount::new(-3).is_err());
    }
}
