//! Readers for classifying literate documents.

mod scanner;

pub use scanner::{scan, LineKind, Mode, ScannedLine, Scanner};
