//! System prompt for the clinic assistant

/// Instruction sent as the system prompt unless `[assistant] system_prompt`
/// overrides it.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful healthcare assistant.

You have access to 4 tools:
1. check_faq - For general questions about hours, location, insurance, services
2. lookup_appointment - For appointment details using appointment ID (APT-XXX)
3. lookup_lab_result - For lab results using lab ID (LAB-XXX)
4. find_doctor - For doctor information

When users ask questions:
- Use the appropriate tool(s) to find information
- If a query requires multiple pieces of information, use multiple tools
- Be friendly and professional
- If you can't find information, politely suggest they call 555-1234

Always provide complete, helpful answers based on the tool results.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinic::directory::CLINIC_PHONE;
    use crate::tool::entities::ToolKind;

    #[test]
    fn test_prompt_mentions_every_tool() {
        for kind in ToolKind::ALL {
            assert!(DEFAULT_SYSTEM_PROMPT.contains(kind.as_str()), "{}", kind);
        }
    }

    #[test]
    fn test_prompt_mentions_clinic_phone() {
        assert!(DEFAULT_SYSTEM_PROMPT.contains(CLINIC_PHONE));
    }
}
