//! Output formatting for answers, batch results and tool listings

pub mod console;
pub mod formatter;
pub mod json;
