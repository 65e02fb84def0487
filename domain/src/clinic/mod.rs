//! Clinic domain: the data behind the assistant's four tools.
//!
//! ```text
//! directory (static tables) ──▶ lookup (pure functions) ──▶ human-readable text
//! ```
//!
//! - [`records`]: record types for appointments, lab results, doctors and FAQ entries
//! - [`directory`]: the read-only tables, declared once as `'static` data
//! - [`lookup`]: the four lookup operations backing the tools
//!
//! A lookup miss is a normal outcome rendered as text, never an error.

pub mod directory;
pub mod lookup;
pub mod records;

pub use lookup::{check_faq, find_doctor, lookup_appointment, lookup_lab_result};
pub use records::{Appointment, Doctor, FaqEntry, LabResult};
