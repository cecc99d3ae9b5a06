//! Transaction import
//!
//! Replays transaction files into a running ledger.

pub mod csv;

pub use self::csv::{replay_csv, ReplayReport};
