//! Balance Calculator
//!
//! Pure computation of per-member net balances from a record snapshot.
//!
//! Each record credits the payer with the full amount and debits every
//! involved member their share. Shares are quantized to whole cents by
//! truncation; the leftover cents go one each to the first involved members
//! in roster order, so every record's shares sum exactly to its amount.
//!
//! # Critical Invariants
//!
//! 1. **Zero Sum**: the returned balances sum to exactly 0
//! 2. **Purity**: inputs are never mutated; recomputation on an unchanged
//!    snapshot yields identical output
//! 3. **Coverage**: every roster member gets an entry, referenced or not

use crate::models::payment::PaymentRecord;
use std::collections::HashMap;

/// Compute net balances for a roster from a payment record snapshot
///
/// Positive balance: the member is owed money. Negative: the member owes.
/// Records are applied in insertion order; order only affects which involved
/// members carry the rounding cents, never the totals.
///
/// Records must reference roster members only; the ledger store guarantees
/// this for every stored record.
///
/// # Example
///
/// ```rust
/// use lightsplit_core_rs::{compute_balances, PaymentRecord};
///
/// let members = vec!["Alice".to_string(), "Bob".to_string()];
/// let records = vec![PaymentRecord::new(
///     "Alice".to_string(),
///     1000,
///     String::new(),
///     members.clone(),
/// )];
///
/// let balances = compute_balances(&members, &records);
/// assert_eq!(balances["Alice"], 500);
/// assert_eq!(balances["Bob"], -500);
/// ```
pub fn compute_balances(members: &[String], records: &[PaymentRecord]) -> HashMap<String, i64> {
    let mut balances: HashMap<String, i64> =
        members.iter().map(|m| (m.clone(), 0)).collect();

    for record in records {
        // Roster order, not stored order, decides who carries the extra cents
        let involved: Vec<&String> = members
            .iter()
            .filter(|m| record.involves(m))
            .collect();
        assert!(
            !involved.is_empty(),
            "record {} involves no roster member",
            record.id()
        );

        let n = involved.len() as i64;
        let share = record.amount() / n;
        let remainder = (record.amount() - share * n) as usize;

        assert!(
            balances.contains_key(record.payer()),
            "payer {} is not on the roster",
            record.payer()
        );
        *balances.get_mut(record.payer()).unwrap() += record.amount();

        for (idx, member) in involved.iter().enumerate() {
            let extra = if idx < remainder { 1 } else { 0 };
            *balances.get_mut(member.as_str()).unwrap() -= share + extra;
        }
    }

    debug_assert_eq!(balances.values().sum::<i64>(), 0);
    balances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|m| m.to_string()).collect()
    }

    fn record(payer: &str, amount: i64, involved: &[&str]) -> PaymentRecord {
        PaymentRecord::new(payer.to_string(), amount, String::new(), names(involved))
    }

    #[test]
    fn test_empty_record_set_is_all_zeros() {
        let members = names(&["Alice", "Bob"]);
        let balances = compute_balances(&members, &[]);
        assert_eq!(balances["Alice"], 0);
        assert_eq!(balances["Bob"], 0);
    }

    #[test]
    fn test_even_three_way_split() {
        let members = names(&["Alice", "Bob", "Carol"]);
        let records = vec![record("Alice", 3000, &["Alice", "Bob", "Carol"])];

        let balances = compute_balances(&members, &records);
        assert_eq!(balances["Alice"], 2000);
        assert_eq!(balances["Bob"], -1000);
        assert_eq!(balances["Carol"], -1000);
    }

    #[test]
    fn test_payer_outside_involved_is_pure_creditor() {
        let members = names(&["Alice", "Bob"]);
        let records = vec![record("Alice", 1000, &["Bob"])];

        let balances = compute_balances(&members, &records);
        assert_eq!(balances["Alice"], 1000);
        assert_eq!(balances["Bob"], -1000);
    }

    #[test]
    fn test_rounding_remainder_goes_to_first_in_roster_order() {
        // 1000 / 3 = 333 with 1 cent left over; Alice is first in roster
        // order among the involved, so she carries 334
        let members = names(&["Alice", "Bob", "Carol"]);
        let records = vec![record("Alice", 1000, &["Alice", "Bob", "Carol"])];

        let balances = compute_balances(&members, &records);
        assert_eq!(balances["Alice"], 1000 - 334);
        assert_eq!(balances["Bob"], -333);
        assert_eq!(balances["Carol"], -333);
        assert_eq!(balances.values().sum::<i64>(), 0);
    }

    #[test]
    fn test_remainder_uses_roster_order_not_stored_order() {
        // Involved listed as [Carol, Bob]; roster order puts Bob first, so
        // Bob carries the extra cent
        let members = names(&["Alice", "Bob", "Carol"]);
        let records = vec![record("Alice", 501, &["Carol", "Bob"])];

        let balances = compute_balances(&members, &records);
        assert_eq!(balances["Bob"], -251);
        assert_eq!(balances["Carol"], -250);
    }

    #[test]
    fn test_unreferenced_member_has_zero_entry() {
        let members = names(&["Alice", "Bob", "Dave"]);
        let records = vec![record("Alice", 1000, &["Alice", "Bob"])];

        let balances = compute_balances(&members, &records);
        assert_eq!(balances["Dave"], 0);
        assert_eq!(balances.len(), 3);
    }

    #[test]
    fn test_multiple_records_accumulate() {
        let members = names(&["Alice", "Bob"]);
        let records = vec![
            record("Alice", 1000, &["Alice", "Bob"]),
            record("Bob", 600, &["Alice", "Bob"]),
        ];

        let balances = compute_balances(&members, &records);
        assert_eq!(balances["Alice"], 500 - 300);
        assert_eq!(balances["Bob"], 300 - 500);
    }
}
