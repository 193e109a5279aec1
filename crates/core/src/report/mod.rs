//! Text rendering of split results.
//!
//! Everything here reads a frozen [`BillSplit`](crate::split::BillSplit);
//! no renderer ever recomputes a number.

pub mod narrative;
pub mod prompt;

pub use narrative::{arithmetic_steps, input_summary, share_text, summary_line};
pub use prompt::assistant_prompt;
