//! Settlement Module
//!
//! Turns a room's net balances into a minimal ordered list of transfers
//! that drives every balance to zero.
//!
//! # Critical Invariants
//!
//! 1. **Bounded**: at most k - 1 transfers for k non-zero participants
//! 2. **Exact**: every transfer amount is positive and in whole cents;
//!    applying all transfers zeroes the balance map
//! 3. **Deterministic**: fixed balances and roster order always produce the
//!    same transfer sequence
//!
//! # Example
//!
//! ```rust
//! use lightsplit_core_rs::settlement::plan_transfers;
//! use std::collections::HashMap;
//!
//! let members = vec!["Alice".to_string(), "Bob".to_string()];
//! let balances = HashMap::from([
//!     ("Alice".to_string(), 500),
//!     ("Bob".to_string(), -500),
//! ]);
//!
//! let transfers = plan_transfers(&members, &balances);
//! assert_eq!(transfers.len(), 1);
//! assert_eq!(transfers[0].from, "Bob");
//! assert_eq!(transfers[0].to, "Alice");
//! assert_eq!(transfers[0].amount, 500);
//! ```

pub mod planner;

// Re-export public API
pub use planner::{plan_transfers, Transfer};
