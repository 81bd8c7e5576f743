//! Customer of the restaurant

/// A restaurant customer.
///
/// `full_name` is a snapshot taken at construction. Renaming through
/// `set_first_name`/`set_last_name` does not recompute it; a fresh
/// display name requires rebuilding the value (e.g. reloading the row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    notes: String,
    full_name: String,
}

impl Customer {
    /// Create a customer that has not been persisted yet (no id).
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self::build(None, first_name.into(), last_name.into(), phone, notes)
    }

    /// Rebuild a customer from a stored row.
    pub(crate) fn from_row(
        id: i64,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        notes: String,
    ) -> Self {
        Self::build(Some(id), first_name, last_name, phone, Some(notes))
    }

    fn build(
        id: Option<i64>,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        // full_name is computed exactly once, here.
        let full_name = format!("{} {}", first_name, last_name);
        Self {
            id,
            first_name,
            last_name,
            phone,
            notes: normalize_notes(notes),
            full_name,
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

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Leaves `full_name` untouched.
    pub fn set_first_name(&mut self, val: impl Into<String>) {
        self.first_name = val.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Leaves `full_name` untouched.
    pub fn set_last_name(&mut self, val: impl Into<String>) {
        self.last_name = val.into();
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, val: Option<String>) {
        self.phone = val;
    }

    /// Never unset: absent notes read as the empty string.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// `None` normalizes to `""`; any other value passes through.
    pub fn set_notes(&mut self, val: Option<String>) {
        self.notes = normalize_notes(val);
    }

    /// Display name snapshot from construction time.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

fn normalize_notes(notes: Option<String>) -> String {
    notes.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_default_to_empty() {
        let customer = Customer::new("Ada", "Lovelace", None, None);
        assert_eq!(customer.notes(), "");
    }

    #[test]
    fn notes_pass_through_when_present() {
        let customer = Customer::new("Ada", "Lovelace", None, Some("window seat".into()));
        assert_eq!(customer.notes(), "window seat");
    }

    #[test]
    fn set_notes_normalizes_none() {
        let mut customer = Customer::new("Ada", "Lovelace", None, Some("regular".into()));
        customer.set_notes(None);
        assert_eq!(customer.notes(), "");

        customer.set_notes(Some(String::new()));
        assert_eq!(customer.notes(), "");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let customer = Customer::new("Ada", "Lovelace", None, None);
        assert_eq!(customer.full_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_is_a_construction_snapshot() {
        // Renaming does not refresh the display name; callers depend on
        // the snapshot staying put until the value is rebuilt.
        let mut customer = Customer::new("Ada", "Lovelace", None, None);
        customer.set_first_name("Augusta");
        customer.set_last_name("King");

        assert_eq!(customer.first_name(), "Augusta");
        assert_eq!(customer.last_name(), "King");
        assert_eq!(customer.full_name(), "Ada Lovelace");
    }

    #[test]
    fn new_customer_has_no_id() {
        let customer = Customer::new("Ada", "Lovelace", None, None);
        assert_eq!(customer.id(), None);
    }

    #[test]
    fn from_row_carries_id() {
        let customer =
            Customer::from_row(7, "Ada".into(), "Lovelace".into(), None, "regular".into());
        assert_eq!(customer.id(), Some(7));
        assert_eq!(customer.full_name(), "Ada Lovelace");
        assert_eq!(customer.notes(), "regular");
    }
}
