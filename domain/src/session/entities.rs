//! Conversation entities

use super::response::{ContentBlock, LlmResponse};
use crate::tool::value_objects::ToolResult;
use serde::{Deserialize, Serialize};

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Turn {
    /// Free text from the user.
    User { text: String },
    /// The model's raw content blocks, tool requests included.
    Assistant { content: Vec<ContentBlock> },
    /// Every result of one tool round, in request order.
    ToolResults { results: Vec<ToolResult> },
}

/// The ordered turn history of a single query (Entity)
///
/// Append-only while the query runs and dropped once the answer is
/// returned; nothing carries over between queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a conversation whose first turn is the user's query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::User { text: query.into() }],
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append the model's response verbatim as an assistant turn.
    pub fn push_assistant(&mut self, response: &LlmResponse) {
        self.turns.push(Turn::Assistant {
            content: response.content.clone(),
        });
    }

    /// Append all results of one tool round as a single turn.
    pub fn push_tool_results(&mut self, results: Vec<ToolResult>) {
        self.turns.push(Turn::ToolResults { results });
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::response::StopReason;

    #[test]
    fn test_new_conversation_starts_with_user_turn() {
        let conversation = Conversation::new("Is APT-101 confirmed?");
        assert_eq!(conversation.len(), 1);
        assert_eq!(
            conversation.turns()[0],
            Turn::User {
                text: "Is APT-101 confirmed?".to_string()
            }
        );
    }

    #[test]
    fn test_turns_append_in_order() {
        let mut conversation = Conversation::new("hours?");
        let response = LlmResponse {
            content: vec![ContentBlock::ToolUse {
                id: "toolu_1".to_string(),
                name: "check_faq".to_string(),
                input: Default::default(),
            }],
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        };
        conversation.push_assistant(&response);
        conversation.push_tool_results(vec![ToolResult::new("toolu_1", "check_faq", "FAQ Answer: x")]);

        assert_eq!(conversation.len(), 3);
        assert!(matches!(conversation.turns()[1], Turn::Assistant { .. }));
        match conversation.last() {
            Some(Turn::ToolResults { results }) => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].tool_use_id, "toolu_1");
            }
            other => panic!("unexpected last turn: {:?}", other),
        }
    }

    #[test]
    fn test_turn_serializes_with_role_tag() {
        let turn = Turn::User {
            text: "hi".to_string(),
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["text"], "hi");
    }
}
