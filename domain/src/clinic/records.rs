//! Clinic record types

use serde::Serialize;

/// A frequently asked question keyed by a lowercase phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub key: &'static str,
    pub answer: &'static str,
}

/// A scheduled appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub patient: &'static str,
    pub doctor: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub status: &'static str,
    pub reason: &'static str,
}

/// A laboratory test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabResult {
    pub patient: &'static str,
    pub test_type: &'static str,
    pub ordered_date: &'static str,
    pub status: &'static str,
    pub urgent: bool,
    pub result_summary: &'static str,
}

impl LabResult {
    /// Priority label shown to the patient.
    pub fn priority(&self) -> &'static str {
        if self.urgent {
            "URGENT"
        } else {
            "Normal priority"
        }
    }
}

/// A doctor in the clinic directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub full_name: &'static str,
    pub specialty: &'static str,
    pub available_days: &'static [&'static str],
    pub accepting_new_patients: bool,
    pub languages: &'static [&'static str],
    pub years_experience: u32,
}

impl Doctor {
    /// Label for whether new patients are accepted.
    pub fn accepting_label(&self) -> &'static str {
        if self.accepting_new_patients {
            "Yes"
        } else {
            "No (full schedule)"
        }
    }
}
