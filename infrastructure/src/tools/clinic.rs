//! Clinic lookup tools: definitions and dispatch.
//!
//! Each tool takes one required string argument and returns the rendered
//! text of the matching lookup in `clinic_domain::clinic`.

use clinic_domain::clinic;
use clinic_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolKind, ToolParameter},
    value_objects::ToolError,
};

/// Get the tool definition for check_faq
pub fn check_faq_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolKind::CheckFaq.as_str(),
        "Search frequently asked questions about clinic hours, location, insurance, services, and policies. Use this for general information queries.",
    )
    .with_parameter(ToolParameter::new(
        "question",
        "The question or topic to search for (e.g., 'hours', 'insurance', 'location')",
        true,
    ))
}

/// Get the tool definition for lookup_appointment
pub fn lookup_appointment_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolKind::LookupAppointment.as_str(),
        "Look up appointment details by appointment ID. Returns patient name, doctor, date, time, status, and reason for visit. Appointment IDs follow format APT-XXX.",
    )
    .with_parameter(ToolParameter::new(
        "appointment_id",
        "The appointment ID (e.g., 'APT-101')",
        true,
    ))
}

/// Get the tool definition for lookup_lab_result
pub fn lookup_lab_result_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolKind::LookupLabResult.as_str(),
        "Look up laboratory test results by lab ID. Returns test type, status, urgency, and result summary. Lab IDs follow format LAB-XXX.",
    )
    .with_parameter(ToolParameter::new(
        "lab_id",
        "The lab result ID (e.g., 'LAB-201')",
        true,
    ))
}

/// Get the tool definition for find_doctor
pub fn find_doctor_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolKind::FindDoctor.as_str(),
        "Get information about a specific doctor including specialty, availability, languages spoken, and whether they're accepting new patients.",
    )
    .with_parameter(ToolParameter::new(
        "doctor_name",
        "The doctor's name (e.g., 'Dr. Smith', 'Dr. Johnson', 'Dr. Lee')",
        true,
    ))
}

/// Definition for any tool kind.
pub fn definition(kind: ToolKind) -> ToolDefinition {
    match kind {
        ToolKind::CheckFaq => check_faq_definition(),
        ToolKind::LookupAppointment => lookup_appointment_definition(),
        ToolKind::LookupLabResult => lookup_lab_result_definition(),
        ToolKind::FindDoctor => find_doctor_definition(),
    }
}

/// Run the lookup behind `kind` with the call's argument.
pub fn execute(kind: ToolKind, call: &ToolCall) -> Result<String, ToolError> {
    let arg = call.require_string(kind.argument_name())?;
    Ok(match kind {
        ToolKind::CheckFaq => clinic::check_faq(arg),
        ToolKind::LookupAppointment => clinic::lookup_appointment(arg),
        ToolKind::LookupLabResult => clinic::lookup_lab_result(arg),
        ToolKind::FindDoctor => clinic::find_doctor(arg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_declare_their_argument() {
        for kind in ToolKind::ALL {
            let def = definition(kind);
            assert_eq!(def.name, kind.as_str());
            assert_eq!(def.parameters.len(), 1);
            let param = def.parameter(kind.argument_name()).unwrap();
            assert!(param.required);
            assert_eq!(param.param_type, "string");
        }
    }

    #[test]
    fn test_execute_dispatches_to_lookup() {
        let call = ToolCall::new("lookup_appointment").with_arg("appointment_id", "apt-101");
        let output = execute(ToolKind::LookupAppointment, &call).unwrap();
        assert!(output.contains("Patient: John Doe"));
        assert!(output.contains("Status: confirmed"));

        let call = ToolCall::new("lookup_lab_result").with_arg("lab_id", "LAB-999");
        assert_eq!(
            execute(ToolKind::LookupLabResult, &call).unwrap(),
            "Lab result LAB-999 not found."
        );
    }

    #[test]
    fn test_execute_requires_argument() {
        let call = ToolCall::new("find_doctor").with_arg("name", "Dr. Lee");
        let err = execute(ToolKind::FindDoctor, &call).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { ref tool, .. } if tool == "find_doctor"));
    }
}
