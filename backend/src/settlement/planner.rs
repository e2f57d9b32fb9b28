//! Transfer planner
//!
//! Greedy largest-first matching: repeatedly pair the creditor with the
//! largest remaining claim against the debtor with the largest remaining
//! debt, transfer the smaller of the two, and drop whichever party reaches
//! zero. Each round retires at least one participant, so k non-zero
//! participants settle in at most k - 1 transfers.
//!
//! Ties are broken by roster position, earlier wins, which makes the output
//! fully deterministic for a fixed balance map and roster order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recommended settlement payment from one member to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Debtor: the member who pays
    pub from: String,

    /// Creditor: the member who receives
    pub to: String,

    /// Transfer amount (i64 cents, always positive)
    pub amount: i64,
}

/// Plan the minimal transfer list that zeroes the given balances
///
/// `members` supplies the tie-break order; balances for names missing from
/// the map are treated as zero. The balances are expected to sum to zero
/// (the balance calculator guarantees this), in which case every creditor
/// and debtor is fully settled.
pub fn plan_transfers(members: &[String], balances: &HashMap<String, i64>) -> Vec<Transfer> {
    // (roster index, remaining cents); both lists stay roster-ordered
    let mut creditors: Vec<(usize, i64)> = Vec::new();
    let mut debtors: Vec<(usize, i64)> = Vec::new();

    for (idx, member) in members.iter().enumerate() {
        match balances.get(member).copied().unwrap_or(0) {
            b if b > 0 => creditors.push((idx, b)),
            b if b < 0 => debtors.push((idx, -b)),
            _ => {}
        }
    }

    let mut transfers = Vec::new();
    while !creditors.is_empty() && !debtors.is_empty() {
        let c = largest(&creditors);
        let d = largest(&debtors);
        let amount = creditors[c].1.min(debtors[d].1);

        transfers.push(Transfer {
            from: members[debtors[d].0].clone(),
            to: members[creditors[c].0].clone(),
            amount,
        });

        creditors[c].1 -= amount;
        debtors[d].1 -= amount;
        if creditors[c].1 == 0 {
            creditors.remove(c);
        }
        if debtors[d].1 == 0 {
            debtors.remove(d);
        }
    }

    transfers
}

/// Index of the entry with the largest remaining amount; ties go to the
/// earlier roster position
fn largest(entries: &[(usize, i64)]) -> usize {
    let mut best = 0;
    for i in 1..entries.len() {
        if entries[i].1 > entries[best].1 {
            best = i;
        }
    }
    best
}
