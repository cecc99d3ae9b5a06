//! The budget ledger
//!
//! [`LedgerEngine`] owns the state; [`Summary`] and [`CategoryStatus`] are the
//! derived read models; [`LedgerEvent`] tells a front end what to refresh.

pub mod engine;
pub mod events;
pub mod summary;

pub use engine::LedgerEngine;
pub use events::{Invalidation, LedgerEvent};
pub use summary::{CategoryStatus, Summary};
