//! Best-effort extraction of bill details from free text.

pub mod extractor;

pub use extractor::ParsedBill;
