//! LightSplit Core - Rust Engine
//!
//! Group expense settlement core: records who paid, how much, and for whom,
//! then produces per-member net balances and a minimal transfer plan that
//! zeroes them.
//!
//! # Architecture
//!
//! - **models**: Domain types (Room, PaymentRecord)
//! - **store**: Ledger store (room registry, validated mutations)
//! - **balance**: Net balance calculator (pure)
//! - **settlement**: Transfer planner (pure)
//! - **view**: Read-model assembly for external callers
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. A room's balances always sum to exactly zero
//! 3. Derived results are recomputed from the record snapshot, never patched

// Module declarations
pub mod balance;
pub mod models;
pub mod settlement;
pub mod store;
pub mod view;

// Re-exports for convenience
pub use balance::compute_balances;
pub use models::{payment::PaymentRecord, room::Room};
pub use settlement::{plan_transfers, Transfer};
pub use store::{LedgerError, LedgerStore};
pub use view::{assemble, ResultView};
