//! Static clinic tables.
//!
//! Tables are `'static` slices so declaration order is part of the data:
//! FAQ matching walks [`FAQ`] front to back and the first hit wins.

use super::records::{Appointment, Doctor, FaqEntry, LabResult};

const HOURS: &str = "Monday-Friday 8AM-6PM, Saturday 9AM-2PM. Closed Sundays.";
const INSURANCE: &str =
    "Yes, we accept Blue Cross Blue Shield, Aetna, UnitedHealthcare, and Cigna.";
const LOCATION: &str = "123 Medical Plaza, Boston MA 02101";
const SCHEDULING: &str =
    "Call us at 555-1234 or use the patient portal at portal.healthcareplus.com";
const COVID: &str = "Yes, rapid COVID tests are available Monday-Friday without appointment.";
const CANCELLATION: &str = "Please cancel at least 24 hours in advance to avoid a $50 fee.";
const LAB_SERVICES: &str = "We offer blood work, X-rays, and ultrasound services on-site.";
const AGES: &str = "We treat patients ages 12 and older.";

/// Clinic phone number offered whenever a lookup comes up empty.
pub const CLINIC_PHONE: &str = "555-1234";

/// FAQ entries in match-priority order.
pub const FAQ: &[FaqEntry] = &[
    FaqEntry { key: "what are your hours", answer: HOURS },
    FaqEntry { key: "hours", answer: HOURS },
    FaqEntry { key: "do you accept insurance", answer: INSURANCE },
    FaqEntry { key: "insurance", answer: INSURANCE },
    FaqEntry { key: "where are you located", answer: LOCATION },
    FaqEntry { key: "location", answer: LOCATION },
    FaqEntry { key: "address", answer: LOCATION },
    FaqEntry { key: "how do i schedule", answer: SCHEDULING },
    FaqEntry { key: "schedule", answer: SCHEDULING },
    FaqEntry { key: "appointment", answer: SCHEDULING },
    FaqEntry { key: "covid test", answer: COVID },
    FaqEntry { key: "covid", answer: COVID },
    FaqEntry { key: "cancellation policy", answer: CANCELLATION },
    FaqEntry { key: "cancel", answer: CANCELLATION },
    FaqEntry {
        key: "parking",
        answer: "Free parking is available in Lot B behind the main building.",
    },
    FaqEntry {
        key: "telehealth",
        answer: "Yes, telehealth appointments are available for follow-ups and consultations.",
    },
    FaqEntry { key: "lab services", answer: LAB_SERVICES },
    FaqEntry { key: "labs", answer: LAB_SERVICES },
    FaqEntry { key: "children", answer: AGES },
    FaqEntry { key: "kids", answer: AGES },
    FaqEntry { key: "age", answer: AGES },
];

/// Appointments keyed by upper-case appointment ID.
pub const APPOINTMENTS: &[(&str, Appointment)] = &[
    (
        "APT-101",
        Appointment {
            patient: "John Doe",
            doctor: "Dr. Smith",
            date: "December 10, 2025",
            time: "10:00 AM",
            status: "confirmed",
            reason: "Annual checkup",
        },
    ),
    (
        "APT-102",
        Appointment {
            patient: "Jane Doe",
            doctor: "Dr. Johnson",
            date: "December 12, 2025",
            time: "2:00 PM",
            status: "pending confirmation",
            reason: "Follow-up consultation",
        },
    ),
    (
        "APT-103",
        Appointment {
            patient: "Bob Wilson",
            doctor: "Dr. Lee",
            date: "December 15, 2025",
            time: "9:00 AM",
            status: "confirmed",
            reason: "Flu symptoms",
        },
    ),
    (
        "APT-104",
        Appointment {
            patient: "Alice Brown",
            doctor: "Dr. Smith",
            date: "December 18, 2025",
            time: "11:00 AM",
            status: "cancelled",
            reason: "Annual physical",
        },
    ),
    (
        "APT-105",
        Appointment {
            patient: "Charlie Davis",
            doctor: "Dr. Johnson",
            date: "December 20, 2025",
            time: "3:00 PM",
            status: "confirmed",
            reason: "Blood pressure check",
        },
    ),
];

/// Lab results keyed by upper-case lab ID.
pub const LAB_RESULTS: &[(&str, LabResult)] = &[
    (
        "LAB-201",
        LabResult {
            patient: "John Doe",
            test_type: "Complete Blood Panel",
            ordered_date: "December 1, 2025",
            status: "ready",
            urgent: false,
            result_summary: "All values within normal range",
        },
    ),
    (
        "LAB-202",
        LabResult {
            patient: "Jane Doe",
            test_type: "Chest X-Ray",
            ordered_date: "December 3, 2025",
            status: "ready",
            urgent: true,
            result_summary: "Abnormal findings - doctor will contact you",
        },
    ),
    (
        "LAB-203",
        LabResult {
            patient: "Bob Wilson",
            test_type: "COVID-19 PCR Test",
            ordered_date: "December 5, 2025",
            status: "processing",
            urgent: false,
            result_summary: "Results expected within 24 hours",
        },
    ),
    (
        "LAB-204",
        LabResult {
            patient: "Alice Brown",
            test_type: "Abdominal Ultrasound",
            ordered_date: "November 28, 2025",
            status: "ready",
            urgent: false,
            result_summary: "No abnormalities detected",
        },
    ),
    (
        "LAB-205",
        LabResult {
            patient: "Charlie Davis",
            test_type: "Lipid Panel",
            ordered_date: "December 6, 2025",
            status: "processing",
            urgent: false,
            result_summary: "Results expected by December 9",
        },
    ),
];

/// Doctors keyed by their short display name (case-sensitive).
pub const DOCTORS: &[(&str, Doctor)] = &[
    (
        "Dr. Smith",
        Doctor {
            full_name: "Dr. Sarah Smith",
            specialty: "Family Medicine",
            available_days: &["Monday", "Wednesday", "Friday"],
            accepting_new_patients: true,
            languages: &["English", "Spanish"],
            years_experience: 15,
        },
    ),
    (
        "Dr. Johnson",
        Doctor {
            full_name: "Dr. Michael Johnson",
            specialty: "Internal Medicine",
            available_days: &["Tuesday", "Thursday"],
            accepting_new_patients: false,
            languages: &["English"],
            years_experience: 22,
        },
    ),
    (
        "Dr. Lee",
        Doctor {
            full_name: "Dr. Emily Lee",
            specialty: "Pediatrics",
            available_days: &["Monday", "Tuesday", "Wednesday"],
            accepting_new_patients: true,
            languages: &["English", "Chinese", "French"],
            years_experience: 8,
        },
    ),
];

/// Look up an appointment by exact ID.
pub fn appointment(id: &str) -> Option<&'static Appointment> {
    APPOINTMENTS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, record)| record)
}

/// Look up a lab result by exact ID.
pub fn lab_result(id: &str) -> Option<&'static LabResult> {
    LAB_RESULTS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, record)| record)
}

/// Look up a doctor by exact display name.
pub fn doctor(name: &str) -> Option<&'static Doctor> {
    DOCTORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, record)| record)
}

/// Display names of every doctor, in directory order.
pub fn doctor_names() -> impl Iterator<Item = &'static str> {
    DOCTORS.iter().map(|(name, _)| *name)
}
