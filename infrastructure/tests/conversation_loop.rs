//! End-to-end runs of the tool-use loop with the real clinic tools.
//!
//! The model side is either a scripted in-process gateway or the real
//! Anthropic gateway pointed at a wiremock server.

use async_trait::async_trait;
use clinic_application::{
    CompletionRequest, ExecutionParams, GatewayError, LlmGateway, NoQueryProgress,
    QuerySettings, RunQueryError, RunQueryInput, RunQueryUseCase,
};
use clinic_domain::{
    ContentBlock, Conversation, LlmResponse, Query, StopReason, Turn, check_faq,
    lookup_appointment, lookup_lab_result,
};
use clinic_infrastructure::{
    AnthropicGateway, AnthropicSettings, ClinicToolExecutor, JsonSchemaToolConverter,
};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Replays canned responses and keeps a copy of every conversation it saw.
struct ScriptedGateway {
    responses: Mutex<VecDeque<LlmResponse>>,
    seen: Mutex<Vec<Conversation>>,
}

impl ScriptedGateway {
    fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<LlmResponse, GatewayError> {
        assert_eq!(request.tools.len(), 4, "every round advertises all tools");
        self.seen.lock().unwrap().push(request.conversation.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Other("script exhausted".to_string()))
    }
}

fn tool_use(id: &str, name: &str, arg: &str, value: &str) -> ContentBlock {
    ContentBlock::ToolUse {
        id: id.to_string(),
        name: name.to_string(),
        input: HashMap::from([(arg.to_string(), Value::from(value))]),
    }
}

fn tool_round(blocks: Vec<ContentBlock>) -> LlmResponse {
    LlmResponse {
        content: blocks,
        stop_reason: Some(StopReason::ToolUse),
        model: None,
    }
}

fn use_case(gateway: Arc<dyn LlmGateway>) -> RunQueryUseCase {
    RunQueryUseCase::new(
        gateway,
        Arc::new(ClinicToolExecutor::new()),
        Arc::new(JsonSchemaToolConverter),
    )
}

fn input(query: &str, execution: ExecutionParams) -> RunQueryInput {
    RunQueryInput::new(
        Query::new(query).unwrap(),
        QuerySettings::default().with_execution(execution),
    )
}

#[tokio::test]
async fn two_tools_in_one_round_feed_back_real_results() {
    let gateway = Arc::new(ScriptedGateway::new(vec![
        tool_round(vec![
            ContentBlock::Text("Let me check both.".to_string()),
            tool_use("toolu_a", "lookup_appointment", "appointment_id", "apt-101"),
            tool_use("toolu_b", "check_faq", "question", "What are your hours?"),
        ]),
        LlmResponse::from_text("Your appointment is confirmed and we open at 8."),
    ]));

    let output = use_case(gateway.clone())
        .execute(
            input("When is APT-101 and when do you open?", ExecutionParams::default()),
            &NoQueryProgress,
        )
        .await
        .unwrap();

    assert_eq!(output.answer, "Your appointment is confirmed and we open at 8.");
    assert_eq!(output.rounds, 2);
    assert_eq!(output.tool_calls, 2);

    let seen = gateway.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].len(), 1);

    let Some(Turn::ToolResults { results }) = seen[1].last() else {
        panic!("second request should end with the tool results");
    };
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].tool_use_id, "toolu_a");
    assert_eq!(results[0].output(), lookup_appointment("APT-101"));
    assert_eq!(results[1].tool_use_id, "toolu_b");
    assert_eq!(results[1].output(), check_faq("What are your hours?"));
}

#[tokio::test]
async fn unknown_ids_come_back_as_not_found_text() {
    let gateway = Arc::new(ScriptedGateway::new(vec![
        tool_round(vec![tool_use("toolu_1", "lookup_lab_result", "lab_id", "LAB-999")]),
        LlmResponse::from_text("I could not find that lab result."),
    ]));

    let output = use_case(gateway.clone())
        .execute(
            input("Results for LAB-999?", ExecutionParams::default().with_parallel_tools(false)),
            &NoQueryProgress,
        )
        .await
        .unwrap();
    assert_eq!(output.tool_calls, 1);

    let seen = gateway.seen.lock().unwrap();
    let Some(Turn::ToolResults { results }) = seen[1].last() else {
        panic!("expected tool results");
    };
    assert_eq!(results[0].output(), lookup_lab_result("LAB-999"));
    assert!(results[0].output().contains("not found"));
}

#[tokio::test]
async fn unknown_tool_aborts_the_query() {
    let gateway = Arc::new(ScriptedGateway::new(vec![tool_round(vec![tool_use(
        "toolu_1",
        "cancel_appointment",
        "appointment_id",
        "APT-101",
    )])]));

    let err = use_case(gateway)
        .execute(input("Cancel APT-101", ExecutionParams::default()), &NoQueryProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, RunQueryError::Tool(_)));
    assert!(err.to_string().contains("Unknown tool: cancel_appointment"));
}

/// Answers with a tool request until the conversation carries a tool result.
struct ClinicModel;

impl Respond for ClinicModel {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let messages = body["messages"].as_array().unwrap();
        let last = &messages[messages.len() - 1];

        let tool_output = last["content"].as_array().and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b["type"] == "tool_result")
                .and_then(|b| b["content"].as_str())
        });

        let reply = match tool_output {
            None => json!({
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "model": body["model"],
                "content": [{
                    "type": "tool_use",
                    "id": "toolu_lab",
                    "name": "lookup_lab_result",
                    "input": {"lab_id": "LAB-201"}
                }],
                "stop_reason": "tool_use"
            }),
            Some(output) => json!({
                "id": "msg_2",
                "type": "message",
                "role": "assistant",
                "model": body["model"],
                "content": [{"type": "text", "text": format!("Summary: {}", output.lines().next().unwrap_or_default())}],
                "stop_reason": "end_turn"
            }),
        };
        ResponseTemplate::new(200).set_body_json(reply)
    }
}

#[tokio::test]
async fn anthropic_gateway_round_trip_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ClinicModel)
        .expect(2)
        .mount(&server)
        .await;

    let gateway = AnthropicGateway::new(AnthropicSettings {
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        api_version: "2023-06-01".to_string(),
        request_timeout: Duration::from_secs(5),
    })
    .unwrap();

    let output = use_case(Arc::new(gateway))
        .execute(input("Are my LAB-201 results in?", ExecutionParams::default()), &NoQueryProgress)
        .await
        .unwrap();

    let first_line = lookup_lab_result("LAB-201");
    let first_line = first_line.lines().next().unwrap();
    assert_eq!(output.answer, format!("Summary: {}", first_line));
    assert_eq!(output.rounds, 2);
    assert_eq!(output.tool_calls, 1);
}
