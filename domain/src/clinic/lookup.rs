//! The four clinic lookups.
//!
//! Each function is a pure read over [`directory`](super::directory) and
//! returns the text handed back to the model (or the MCP host) verbatim.

use super::directory::{self, CLINIC_PHONE};

/// Search the FAQ.
///
/// The question is lowercased and trimmed, then the first entry whose key
/// contains the question, or is contained in it, wins. Entries are scanned in
/// declaration order.
pub fn check_faq(question: &str) -> String {
    let question = question.trim().to_lowercase();

    directory::FAQ
        .iter()
        .find(|entry| entry.key.contains(question.as_str()) || question.contains(entry.key))
        .map(|entry| format!("FAQ Answer: {}", entry.answer))
        .unwrap_or_else(|| {
            format!(
                "I couldn't find an answer to that question in our FAQ. \
                 Please call us at {} for assistance.",
                CLINIC_PHONE
            )
        })
}

/// Look up an appointment; the ID is matched case-insensitively.
pub fn lookup_appointment(appointment_id: &str) -> String {
    let id = appointment_id.to_uppercase();

    match directory::appointment(&id) {
        Some(apt) => format!(
            "Appointment {id}:\n\
             Patient: {}\n\
             Doctor: {}\n\
             Date: {}\n\
             Time: {}\n\
             Status: {}\n\
             Reason: {}",
            apt.patient, apt.doctor, apt.date, apt.time, apt.status, apt.reason
        ),
        None => format!("Appointment {id} not found."),
    }
}

/// Look up a lab result; the ID is matched case-insensitively.
pub fn lookup_lab_result(lab_id: &str) -> String {
    let id = lab_id.to_uppercase();

    match directory::lab_result(&id) {
        Some(lab) => format!(
            "Lab Result {id}:\n\
             Patient: {}\n\
             Test: {}\n\
             Ordered: {}\n\
             Status: {}\n\
             Priority: {}\n\
             Summary: {}",
            lab.patient,
            lab.test_type,
            lab.ordered_date,
            lab.status,
            lab.priority(),
            lab.result_summary
        ),
        None => format!("Lab result {id} not found."),
    }
}

/// Look up a doctor by display name, exactly as stored (e.g. `Dr. Smith`).
pub fn find_doctor(doctor_name: &str) -> String {
    match directory::doctor(doctor_name) {
        Some(doc) => format!(
            "{}:\n\
             Specialty: {}\n\
             Available: {}\n\
             Accepting new patients: {}\n\
             Languages: {}\n\
             Experience: {} years",
            doc.full_name,
            doc.specialty,
            doc.available_days.join(", "),
            doc.accepting_label(),
            doc.languages.join(", "),
            doc.years_experience
        ),
        None => format!(
            "Doctor {doctor_name} not found. Available doctors: {}",
            directory::doctor_names().collect::<Vec<_>>().join(", ")
        ),
    }
}
