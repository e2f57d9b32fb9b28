//! Result assembly
//!
//! Builds the single read-model external callers consume: title, roster,
//! balances, transfer plan, aggregates, and the raw record snapshot. Always
//! rebuilt whole from the current room state.

use crate::balance::compute_balances;
use crate::models::payment::PaymentRecord;
use crate::models::room::Room;
use crate::settlement::{plan_transfers, Transfer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The settlement read-model for one room
///
/// Serializes to the wire shape clients render: `balances` keyed by member
/// name, `transactions` as `{from, to, amount}` rows, amounts in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    pub title: String,
    pub members: Vec<String>,
    pub balances: HashMap<String, i64>,
    pub transactions: Vec<Transfer>,
    /// Sum of all record amounts (i64 cents)
    pub total_spent: i64,
    /// total_spent / member count, truncated to whole cents
    pub average_per_person: i64,
    pub payment_records: Vec<PaymentRecord>,
}

/// Assemble the read-model from a room snapshot
///
/// Infallible for a valid room: an empty record set yields zero balances,
/// no transfers, and zero aggregates.
pub fn assemble(room: &Room) -> ResultView {
    let balances = compute_balances(room.members(), room.payments());
    let transactions = plan_transfers(room.members(), &balances);
    let total_spent: i64 = room.payments().iter().map(|p| p.amount()).sum();
    // Roster is never empty (rooms require two members)
    let average_per_person = total_spent / room.members().len() as i64;

    ResultView {
        title: room.title().to_string(),
        members: room.members().to_vec(),
        balances,
        transactions,
        total_spent,
        average_per_person,
        payment_records: room.payments().to_vec(),
    }
}
