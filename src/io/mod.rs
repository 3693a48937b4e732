//! Output writing for tangled files.

mod transaction;

pub use transaction::{Transaction, WriteAction};
