//! Ledger Store
//!
//! Owns every room: identity, roster, and the ordered payment record
//! sequence. All validation happens here, synchronously, before any state
//! changes; models assert the same invariants as a backstop.
//!
//! # Concurrency
//!
//! The registry maps room ids to individually locked rooms. Mutations take
//! that room's write lock, so id assignment and record ordering are
//! race-free per room; reads take the read lock and clone a snapshot.
//! Rooms are independent units of concurrency, the registry lock is only
//! held long enough to resolve an id to its room handle.
//!
//! # Critical Invariants
//!
//! 1. Room ids are unique among live rooms
//! 2. Every stored record satisfies: amount > 0, payer on the roster,
//!    involved members a non-empty roster subset
//! 3. Record ids and timestamps are store-assigned, never caller-supplied

use crate::models::payment::PaymentRecord;
use crate::models::room::Room;
use crate::view::{self, ResultView};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by ledger store operations
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Room not found: {room_id}")]
    RoomNotFound { room_id: String },

    #[error("Payment not found: {record_id}")]
    PaymentNotFound { record_id: String },

    #[error("Payment amount must be positive, got {amount}")]
    InvalidAmount { amount: i64 },

    #[error("Invalid members: {0}")]
    InvalidMembers(String),
}

/// Registry of rooms, each behind its own lock
///
/// Shared by reference (`Arc<LedgerStore>`) with whatever embeds the core;
/// every method takes `&self`.
///
/// # Example
///
/// ```rust
/// use lightsplit_core_rs::LedgerStore;
///
/// let store = LedgerStore::new();
/// let room = store
///     .create_room("Weekend trip", &["Alice".to_string(), "Bob".to_string()])
///     .unwrap();
///
/// let record = store
///     .add_payment(room.id(), "Alice", 3000, "dinner", None)
///     .unwrap();
/// assert_eq!(record.involved_members(), room.members());
///
/// let result = store.get_result(room.id()).unwrap();
/// assert_eq!(result.total_spent, 3000);
/// ```
#[derive(Debug, Default)]
pub struct LedgerStore {
    rooms: RwLock<HashMap<String, Arc<RwLock<Room>>>>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Create a room from a title and raw member names
    ///
    /// Names are trimmed; blanks are dropped and duplicates collapse to
    /// their first occurrence. Fails with `InvalidMembers` unless at least
    /// two distinct names remain. Returns a snapshot of the created room.
    pub fn create_room(&self, title: &str, members: &[String]) -> Result<Room, LedgerError> {
        let roster = normalize_roster(members)?;

        // Id generation happens under the registry write lock, so a
        // concurrent create cannot race the collision check
        let mut rooms = self.rooms.write();
        let id = fresh_room_id(&rooms);
        let room = Room::new(id.clone(), title.to_string(), roster);
        rooms.insert(id.clone(), Arc::new(RwLock::new(room.clone())));

        tracing::info!(room_id = %id, members = room.members().len(), "room created");
        Ok(room)
    }

    /// Record a payment in a room
    ///
    /// `involved = None` defaults to all current room members. Fails with
    /// `RoomNotFound`, `InvalidAmount`, or `InvalidMembers`; on success the
    /// stored record (with its assigned id and timestamp) is returned.
    pub fn add_payment(
        &self,
        room_id: &str,
        payer: &str,
        amount: i64,
        description: &str,
        involved: Option<&[String]>,
    ) -> Result<PaymentRecord, LedgerError> {
        let handle = self.room(room_id)?;
        let mut room = handle.write();

        let involved = validate_payment(&room, payer, amount, involved)?;
        let record = PaymentRecord::new(
            payer.to_string(),
            amount,
            description.to_string(),
            involved,
        );
        room.push_payment(record.clone());

        tracing::debug!(room_id, record_id = %record.id(), amount, "payment recorded");
        Ok(record)
    }

    /// Replace a payment's fields wholesale, preserving id and position
    ///
    /// The new field set is re-validated exactly like an add; `updated_at`
    /// is stamped on success.
    pub fn edit_payment(
        &self,
        room_id: &str,
        record_id: &str,
        payer: &str,
        amount: i64,
        description: &str,
        involved: Option<&[String]>,
    ) -> Result<PaymentRecord, LedgerError> {
        let handle = self.room(room_id)?;
        let mut room = handle.write();

        if room.payment(record_id).is_none() {
            return Err(LedgerError::PaymentNotFound {
                record_id: record_id.to_string(),
            });
        }
        let involved = validate_payment(&room, payer, amount, involved)?;

        let record = room
            .payment_mut(record_id)
            .expect("checked above under the same write lock");
        record.replace(
            payer.to_string(),
            amount,
            description.to_string(),
            involved,
        );
        let record = record.clone();

        tracing::debug!(room_id, record_id, amount, "payment edited");
        Ok(record)
    }

    /// Permanently remove a payment record
    pub fn delete_payment(&self, room_id: &str, record_id: &str) -> Result<(), LedgerError> {
        let handle = self.room(room_id)?;
        let mut room = handle.write();

        room.remove_payment(record_id)
            .ok_or_else(|| LedgerError::PaymentNotFound {
                record_id: record_id.to_string(),
            })?;

        tracing::debug!(room_id, record_id, "payment deleted");
        Ok(())
    }

    /// Append a member to a room's roster
    ///
    /// Existing members are never removed, so history stays valid.
    pub fn add_member(&self, room_id: &str, name: &str) -> Result<Room, LedgerError> {
        let handle = self.room(room_id)?;
        let mut room = handle.write();

        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidMembers(
                "member name is empty".to_string(),
            ));
        }
        if room.is_member(name) {
            return Err(LedgerError::InvalidMembers(format!(
                "duplicate member name: {name}"
            )));
        }
        room.add_member(name.to_string());

        tracing::info!(room_id, member = name, "member added");
        Ok(room.clone())
    }

    /// Get a read-only snapshot of a room and its record sequence
    pub fn get_room(&self, room_id: &str) -> Result<Room, LedgerError> {
        let handle = self.room(room_id)?;
        let room = handle.read();
        Ok(room.clone())
    }

    /// Assemble the full read-model for a room
    ///
    /// Always recomputed from the current snapshot; never fails for a live
    /// room (an empty record set yields zero balances and no transfers).
    pub fn get_result(&self, room_id: &str) -> Result<ResultView, LedgerError> {
        let handle = self.room(room_id)?;
        let room = handle.read();
        Ok(view::assemble(&room))
    }

    /// Resolve a room id to its lock handle
    fn room(&self, room_id: &str) -> Result<Arc<RwLock<Room>>, LedgerError> {
        self.rooms
            .read()
            .get(room_id)
            .cloned()
            .ok_or_else(|| LedgerError::RoomNotFound {
                room_id: room_id.to_string(),
            })
    }
}

/// Trim, drop blanks, deduplicate preserving first occurrence; require two
/// distinct names
fn normalize_roster(raw: &[String]) -> Result<Vec<String>, LedgerError> {
    let mut roster: Vec<String> = Vec::new();
    for name in raw {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if !roster.iter().any(|m| m == name) {
            roster.push(name.to_string());
        }
    }

    if roster.len() < 2 {
        return Err(LedgerError::InvalidMembers(format!(
            "need at least two distinct member names, got {}",
            roster.len()
        )));
    }
    Ok(roster)
}

/// Validate a payment field set against a room, returning the involved
/// members deduplicated in roster order
fn validate_payment(
    room: &Room,
    payer: &str,
    amount: i64,
    involved: Option<&[String]>,
) -> Result<Vec<String>, LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount { amount });
    }
    if !room.is_member(payer) {
        return Err(LedgerError::InvalidMembers(format!(
            "payer {payer} is not a room member"
        )));
    }

    match involved {
        None => Ok(room.members().to_vec()),
        Some(names) => {
            for name in names {
                if !room.is_member(name) {
                    return Err(LedgerError::InvalidMembers(format!(
                        "involved member {name} is not a room member"
                    )));
                }
            }
            let canonical = room.roster_ordered(names);
            if canonical.is_empty() {
                return Err(LedgerError::InvalidMembers(
                    "payment must involve at least one member".to_string(),
                ));
            }
            Ok(canonical)
        }
    }
}

/// Draw short URL-safe room ids until one misses every live room
fn fresh_room_id(rooms: &HashMap<String, Arc<RwLock<Room>>>) -> String {
    loop {
        let candidate = uuid::Uuid::new_v4().simple().to_string()[..12].to_string();
        if !rooms.contains_key(&candidate) {
            return candidate;
        }
    }
}
