//! Payment record model
//!
//! Represents one recorded contribution: a payer, an amount, and the subset
//! of room members who share the cost. Each record has:
//! - Payer (member name)
//! - Amount (i64 cents)
//! - Free-form description (possibly empty)
//! - Involved members (non-empty, stored in room-member order)
//! - Creation timestamp, and an update timestamp once edited
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded contribution by a payer, split across involved members
///
/// Ids and creation timestamps are assigned at construction and survive
/// edits; an edit replaces every other field wholesale and stamps
/// `updated_at`.
///
/// # Example
/// ```
/// use lightsplit_core_rs::PaymentRecord;
///
/// let record = PaymentRecord::new(
///     "Alice".to_string(),
///     3000, // $30.00 in cents
///     "dinner".to_string(),
///     vec!["Alice".to_string(), "Bob".to_string()],
/// );
/// assert_eq!(record.amount(), 3000);
/// assert!(record.updated_at().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique record identifier (UUID), stable for the record's lifetime
    id: String,

    /// Member who paid
    payer: String,

    /// Amount paid (i64 cents)
    amount: i64,

    /// Free-form description, possibly empty
    description: String,

    /// Members sharing the cost, in room-member order
    involved_members: Vec<String>,

    /// When the record was created (store-assigned)
    created_at: DateTime<Utc>,

    /// When the record was last edited, absent if never edited
    updated_at: Option<DateTime<Utc>>,
}

impl PaymentRecord {
    /// Create a new payment record
    ///
    /// The id and creation timestamp are assigned here, never by the caller.
    /// Callers (the ledger store) validate payer and involved-member
    /// membership before construction.
    ///
    /// # Panics
    /// Panics if `amount <= 0` or `involved_members` is empty.
    pub fn new(
        payer: String,
        amount: i64,
        description: String,
        involved_members: Vec<String>,
    ) -> Self {
        assert!(amount > 0, "amount must be positive");
        assert!(
            !involved_members.is_empty(),
            "payment must involve at least one member"
        );

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            payer,
            amount,
            description,
            involved_members,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Get record ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get payer member name
    pub fn payer(&self) -> &str {
        &self.payer
    }

    /// Get amount paid (i64 cents)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Get description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get members sharing the cost
    pub fn involved_members(&self) -> &[String] {
        &self.involved_members
    }

    /// Check whether a member shares the cost of this record
    pub fn involves(&self, member: &str) -> bool {
        self.involved_members.iter().any(|m| m == member)
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get last-edit timestamp, `None` if never edited
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replace all caller-editable fields, preserving id and `created_at`
    ///
    /// Stamps `updated_at`. The ledger store re-validates the new field set
    /// before calling this.
    ///
    /// # Panics
    /// Panics if `amount <= 0` or `involved_members` is empty.
    pub fn replace(
        &mut self,
        payer: String,
        amount: i64,
        description: String,
        involved_members: Vec<String>,
    ) {
        assert!(amount > 0, "amount must be positive");
        assert!(
            !involved_members.is_empty(),
            "payment must involve at least one member"
        );

        self.payer = payer;
        self.amount = amount;
        self.description = description;
        self.involved_members = involved_members;
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(payer: &str, amount: i64, involved: &[&str]) -> PaymentRecord {
        PaymentRecord::new(
            payer.to_string(),
            amount,
            String::new(),
            involved.iter().map(|m| m.to_string()).collect(),
        )
    }

    #[test]
    fn test_new_record_has_no_update_timestamp() {
        let r = record("Alice", 1000, &["Alice", "Bob"]);
        assert!(r.updated_at().is_none());
        assert_eq!(r.payer(), "Alice");
        assert_eq!(r.amount(), 1000);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = record("Alice", 1000, &["Alice", "Bob"]);
        let b = record("Alice", 1000, &["Alice", "Bob"]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_replace_preserves_id_and_created_at() {
        let mut r = record("Alice", 1000, &["Alice", "Bob"]);
        let id = r.id().to_string();
        let created = r.created_at();

        r.replace(
            "Bob".to_string(),
            2500,
            "taxi".to_string(),
            vec!["Bob".to_string()],
        );

        assert_eq!(r.id(), id);
        assert_eq!(r.created_at(), created);
        assert_eq!(r.payer(), "Bob");
        assert_eq!(r.amount(), 2500);
        assert_eq!(r.description(), "taxi");
        assert!(r.updated_at().is_some());
    }

    #[test]
    fn test_involves() {
        let r = record("Alice", 1000, &["Bob", "Carol"]);
        assert!(r.involves("Bob"));
        assert!(r.involves("Carol"));
        assert!(!r.involves("Alice"));
    }

    #[test]
    #[should_panic(expected = "amount must be positive")]
    fn test_non_positive_amount_panics() {
        record("Alice", 0, &["Alice", "Bob"]);
    }

    #[test]
    #[should_panic(expected = "at least one member")]
    fn test_empty_involved_panics() {
        record("Alice", 1000, &[]);
    }
}
