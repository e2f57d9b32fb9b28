//! Domain models for the expense ledger

pub mod payment;
pub mod room;

// Re-exports
pub use payment::PaymentRecord;
pub use room::Room;
