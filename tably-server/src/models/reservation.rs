//! A reservation for a party

use std::fmt;

use chrono::{DateTime, Utc};

use super::{GuestCount, StartAt, ValidationError};

/// Attempt to change the customer on a reservation that already has one.
///
/// The owning customer is write-once; reassignment is refused and the
/// existing value is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerLocked {
    /// The customer id already on the reservation
    pub existing: i64,
}

impl fmt::Display for CustomerLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not authorized to change customer id")
    }
}

impl std::error::Error for CustomerLocked {}

/// A table reservation for a party of guests.
///
/// Invalid values cannot exist here: party size and start time are
/// validated in the constructor and in every setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: Option<i64>,
    customer_id: Option<i64>,
    num_guests: GuestCount,
    start_at: StartAt,
    notes: String,
}

impl Reservation {
    /// Create a reservation that has not been persisted yet.
    pub fn new(
        customer_id: Option<i64>,
        num_guests: i32,
        start_at: &str,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            customer_id,
            num_guests: GuestCount::new(num_guests)?,
            start_at: StartAt::parse(start_at)?,
            notes: notes.unwrap_or_default(),
        })
    }

    /// Rebuild a reservation from a stored row.
    pub(crate) fn from_row(
        id: i64,
        customer_id: i64,
        num_guests: i32,
        start_at: DateTime<Utc>,
        notes: String,
    ) -> Self {
        Self {
            id: Some(id),
            customer_id: Some(customer_id),
            num_guests: GuestCount::from_stored(num_guests),
            start_at: StartAt::from_stored(start_at),
            notes,
        }
    }

    /// Database-assigned id; `None` until the first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Record the id assigned by the database on insert.
    pub(crate) fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn customer_id(&self) -> Option<i64> {
        self.customer_id
    }

    /// Assign the owning customer. Write-once: fails once a customer is
    /// set, keeping the existing value.
    pub fn set_customer_id(&mut self, id: i64) -> Result<(), CustomerLocked> {
        match self.customer_id {
            None => {
                self.customer_id = Some(id);
                Ok(())
            }
            Some(existing) => Err(CustomerLocked { existing }),
        }
    }

    pub fn num_guests(&self) -> i32 {
        self.num_guests.get()
    }

    pub fn set_num_guests(&mut self, val: i32) -> Result<(), ValidationError> {
        self.num_guests = GuestCount::new(val)?;
        Ok(())
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.start_at.as_datetime()
    }

    pub fn set_start_at(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.start_at = StartAt::parse(raw)?;
        Ok(())
    }

    /// Start time for display: "Month Day, Year, h:mm am/pm".
    pub fn formatted_start_at(&self) -> String {
        self.start_at.display()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, val: Option<String>) {
        self.notes = val.unwrap_or_default();
    }
}
