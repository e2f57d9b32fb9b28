//! Room model
//!
//! A room is an isolated ledger: a fixed member roster plus the
//! insertion-ordered sequence of payment records charged against it.
//!
//! # Critical Invariants
//!
//! 1. **Roster Stability**: member order never changes; members are never
//!    removed (records may reference any of them)
//! 2. **Record Uniqueness**: each record id appears exactly once
//! 3. **Record Ordering**: insertion order, preserved across edits, broken
//!    only by deletion

use crate::models::payment::PaymentRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An isolated ledger instance with its own member roster and history
///
/// # Example
///
/// ```rust
/// use lightsplit_core_rs::Room;
///
/// let room = Room::new(
///     "a1b2c3d4e5f6".to_string(),
///     "Weekend trip".to_string(),
///     vec!["Alice".to_string(), "Bob".to_string()],
/// );
/// assert_eq!(room.members().len(), 2);
/// assert!(room.payments().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Opaque room identifier, unique among live rooms
    id: String,

    /// Display title
    title: String,

    /// Member roster, ordered and unique; defines display and tie-break order
    members: Vec<String>,

    /// When the room was created
    created_at: DateTime<Utc>,

    /// Payment records in insertion order
    payments: Vec<PaymentRecord>,
}

impl Room {
    /// Create a new room with the given roster
    ///
    /// The ledger store validates and normalizes the roster (trimming,
    /// deduplication) before construction.
    ///
    /// # Panics
    /// Panics if the roster has fewer than two members or contains
    /// duplicates or empty names.
    pub fn new(id: String, title: String, members: Vec<String>) -> Self {
        assert!(members.len() >= 2, "room needs at least two members");
        for (i, member) in members.iter().enumerate() {
            assert!(!member.is_empty(), "member names must be non-empty");
            assert!(
                !members[..i].contains(member),
                "duplicate member name {}",
                member
            );
        }

        Self {
            id,
            title,
            members,
            created_at: Utc::now(),
            payments: Vec::new(),
        }
    }

    /// Get room ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get room title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the member roster in display order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get payment records in insertion order
    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    /// Check whether a name is on the roster
    pub fn is_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Append a new member to the roster
    ///
    /// Existing members are never removed or reordered, so records that
    /// reference them stay valid. The store validates the name first.
    ///
    /// # Panics
    /// Panics if the name is empty or already on the roster.
    pub fn add_member(&mut self, name: String) {
        assert!(!name.is_empty(), "member names must be non-empty");
        assert!(!self.is_member(&name), "duplicate member name {}", name);
        self.members.push(name);
    }

    /// Project a set of names onto the roster: deduplicated, roster-ordered
    ///
    /// Names not on the roster are dropped; the store rejects those before
    /// getting here.
    pub fn roster_ordered(&self, names: &[String]) -> Vec<String> {
        self.members
            .iter()
            .filter(|m| names.iter().any(|n| n == *m))
            .cloned()
            .collect()
    }

    /// Look up a payment record by id
    pub fn payment(&self, record_id: &str) -> Option<&PaymentRecord> {
        self.payments.iter().find(|p| p.id() == record_id)
    }

    /// Look up a payment record by id, mutably
    pub fn payment_mut(&mut self, record_id: &str) -> Option<&mut PaymentRecord> {
        self.payments.iter_mut().find(|p| p.id() == record_id)
    }

    /// Append a payment record
    ///
    /// # Panics
    /// Panics if the record id already exists in this room.
    pub fn push_payment(&mut self, record: PaymentRecord) {
        assert!(
            self.payment(record.id()).is_none(),
            "payment id {} already exists",
            record.id()
        );
        self.payments.push(record);
    }

    /// Remove a payment record permanently, returning it if present
    ///
    /// No tombstone: later recomputation simply excludes it.
    pub fn remove_payment(&mut self, record_id: &str) -> Option<PaymentRecord> {
        let idx = self.payments.iter().position(|p| p.id() == record_id)?;
        Some(self.payments.remove(idx))
    }
}
