// Signature request tools: inspect, create, remind and cancel

use crate::error::{ArgumentError, ToolError};
use crate::protocol::ToolSchema;
use crate::tools::{
    json_schema_enum, json_schema_number, json_schema_object, json_schema_string, Arguments,
    FromArguments, ListSplitMode, Tool, ToolTier,
};
use serde_json::Number;
use signaturit_core::types::{
    DeliveryType, Document, Recipient, SignatureId, SignatureRequest, SigningMode,
};
use signaturit_sdk::api::{CancelSignatureRequest, CreateSignatureRequest};
use signaturit_sdk::SignaturitClient;

/// Expiry applied when the caller does not pass `expires_in_days`
pub const DEFAULT_EXPIRES_IN_DAYS: u32 = 7;

fn push_document(summary: &mut String, document: &Document) {
    summary.push_str(&format!(
        "Document {}: sent to {} ({}) is {}\n",
        document.id, document.name, document.email, document.status
    ));
    if !document.file.name.is_empty() {
        summary.push_str(&format!(
            "  File: {} [ID: {}], {} pages, {} bytes\n",
            document.file.name, document.file.id, document.file.pages, document.file.size
        ));
    }
    for event in &document.events {
        summary.push_str(&format!("  - {} at {}\n", event.event_type, event.created_at));
    }
}

/// Per-document status with events, followed by the overall readiness flag.
pub fn format_signature(request: &SignatureRequest) -> String {
    let mut summary = format!(
        "Signature ID {} created at {}, summary:\n",
        request.id, request.created_at
    );
    for document in &request.documents {
        push_document(&mut summary, document);
    }
    summary.push_str(&format!("\nComplete: {}", request.is_complete()));
    summary
}

#[derive(Debug)]
struct SignatureIdArgs {
    signature_id: SignatureId,
}

impl FromArguments for SignatureIdArgs {
    fn from_arguments(args: &Arguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            signature_id: SignatureId::new(args.required_str("signature_id")?),
        })
    }
}

/// Tool to inspect a signature request
pub struct GetSignatureTool {
    client: SignaturitClient,
}

impl GetSignatureTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetSignatureTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_signature".to_string(),
            description: "Retrieve a single signature request by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "signature_id": json_schema_string("ID of the signature request to retrieve")
                }),
                vec!["signature_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: SignatureIdArgs = arguments.decode()?;
        let request = self.client.signatures().get(&args.signature_id).await?;
        Ok(format_signature(&request))
    }
}

#[derive(Debug)]
struct CreateSignatureArgs {
    templates: Vec<String>,
    recipients: Vec<Recipient>,
    expires_in_days: Number,
    body: String,
    subject: String,
    delivery_type: Option<DeliveryType>,
    signing_mode: Option<SigningMode>,
}

impl CreateSignatureArgs {
    fn parse(args: &Arguments, template_split: ListSplitMode) -> Result<Self, ArgumentError> {
        Ok(Self {
            templates: args.required_list("templates", template_split)?,
            recipients: args.required_json_list("recipients")?,
            expires_in_days: args.number_or("expires_in_days", DEFAULT_EXPIRES_IN_DAYS)?,
            body: args.required_str("body")?,
            subject: args.required_str("subject")?,
            delivery_type: args.optional_enum("type")?,
            signing_mode: args.optional_enum("signing_mode")?,
        })
    }
}

/// Tool to send templates out for signature
pub struct CreateSignatureTool {
    client: SignaturitClient,
    template_split: ListSplitMode,
}

impl CreateSignatureTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self {
            client,
            template_split: ListSplitMode::default(),
        }
    }

    pub fn with_template_split(mut self, mode: ListSplitMode) -> Self {
        self.template_split = mode;
        self
    }
}

#[async_trait::async_trait]
impl Tool for CreateSignatureTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_signature".to_string(),
            description: "Create a new signature request (multi-signer) using templates instead of file uploads".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "templates": json_schema_string(
                        "Comma-separated list of template IDs or hashtags to use for the signature request. For example: #NDA,abc123"
                    ),
                    "recipients": json_schema_string(
                        "JSON-encoded list of signers, each with name and email. For example: [{\"name\":\"John Doe\",\"email\":\"john.doe@signaturit.com\"}]"
                    ),
                    "body": json_schema_string("Body message for the email or SMS (HTML allowed in email)"),
                    "subject": json_schema_string("Subject for the email request"),
                    "expires_in_days": json_schema_number(
                        "Number of days before the signature request expires (1-365). Defaults to 7"
                    ),
                    "type": json_schema_enum(
                        "Delivery type. OPTIONAL",
                        &["email", "sms", "wizard"],
                        "email"
                    ),
                    "signing_mode": json_schema_enum(
                        "Signing order. OPTIONAL",
                        &["sequential", "parallel"],
                        "sequential"
                    )
                }),
                vec!["templates", "recipients", "body", "subject"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args = CreateSignatureArgs::parse(arguments, self.template_split)?;

        let request = CreateSignatureRequest {
            templates: args.templates,
            recipients: args.recipients,
            expires_in: args.expires_in_days,
            body: args.body,
            subject: args.subject,
            delivery_type: args.delivery_type,
            signing_mode: args.signing_mode,
        };

        let created = self.client.signatures().create(&request).await?;

        let recipients: Vec<String> = request.recipients.iter().map(ToString::to_string).collect();
        let mut summary = format!(
            "Signature request {} created from templates [{}] for {}\n",
            created.id,
            request.templates.join(", "),
            recipients.join(", ")
        );
        for document in &created.documents {
            push_document(&mut summary, document);
        }
        Ok(summary)
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier1
    }
}

/// Tool to nudge pending signers
pub struct SendSignatureReminderTool {
    client: SignaturitClient,
}

impl SendSignatureReminderTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for SendSignatureReminderTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "send_signature_reminder".to_string(),
            description: "Send a reminder email/SMS to the signer of a pending signature".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "signature_id": json_schema_string("ID of the signature request to remind")
                }),
                vec!["signature_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: SignatureIdArgs = arguments.decode()?;
        self.client.signatures().remind(&args.signature_id).await?;
        Ok(format!("Reminder sent for signature {}", args.signature_id))
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier1
    }
}

#[derive(Debug)]
struct CancelSignatureArgs {
    signature_id: SignatureId,
    reason: String,
}

impl FromArguments for CancelSignatureArgs {
    fn from_arguments(args: &Arguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            signature_id: SignatureId::new(args.required_str("signature_id")?),
            reason: args.optional_str("reason")?.unwrap_or_default(),
        })
    }
}

/// Tool to stop an in-progress signature request
pub struct CancelSignatureTool {
    client: SignaturitClient,
}

impl CancelSignatureTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CancelSignatureTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "cancel_signature".to_string(),
            description: "Cancel an in-progress signature so it can no longer be signed".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "signature_id": json_schema_string("ID of the signature request to cancel"),
                    "reason": json_schema_string("Optional reason for canceling the signature request")
                }),
                vec!["signature_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: CancelSignatureArgs = arguments.decode()?;
        let request = CancelSignatureRequest {
            reason: args.reason,
        };

        self.client
            .signatures()
            .cancel(&args.signature_id, &request)
            .await?;

        if request.reason.is_empty() {
            Ok(format!("Signature {} canceled.", args.signature_id))
        } else {
            Ok(format!(
                "Signature {} canceled. Reason: {}",
                args.signature_id, request.reason
            ))
        }
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentReason;
    use serde_json::json;
    use signaturit_sdk::SignaturitError;
    use wiremock::matchers::{body_json, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SignaturitClient {
        SignaturitClient::builder()
            .api_key("test-token")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    fn args(value: serde_json::Value) -> Arguments {
        Arguments::from_value(value).unwrap()
    }

    fn document_json(id: &str, name: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("{}@example.com", name.to_lowercase()),
            "name": name,
            "status": status,
            "file": {"id": format!("file-{}", id), "name": "nda.pdf", "pages": 2, "size": 2048},
            "events": [
                {"type": "email_processed", "created_at": "2024-03-01T10:00:00+0000"},
                {"type": "document_opened", "created_at": "2024-03-01T11:00:00+0000"}
            ]
        })
    }

    fn create_args() -> serde_json::Value {
        json!({
            "templates": "#NDA,abc123",
            "recipients": "[{\"name\":\"Jane\",\"email\":\"jane@example.com\"},{\"name\":\"Bob\",\"email\":\"bob@example.com\"}]",
            "body": "Please sign",
            "subject": "NDA"
        })
    }

    async fn mount_create(server: &MockServer, expected_body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/signatures.json"))
            .and(body_partial_json(expected_body))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "sig-9",
                "created_at": "2024-03-01",
                "documents": [document_json("d-1", "Jane", "in_queue")]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_signature_summary_and_readiness() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/signatures/sig-1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "sig-1",
                "created_at": "2024-03-01",
                "documents": [
                    document_json("d-1", "Jane", "completed"),
                    document_json("d-2", "Bob", "completed")
                ]
            })))
            .mount(&server)
            .await;

        let tool = GetSignatureTool::new(client_for(&server));
        let text = tool
            .execute(&args(json!({"signature_id": "sig-1"})))
            .await
            .unwrap();

        assert!(text.starts_with("Signature ID sig-1 created at 2024-03-01"));
        assert!(text.contains("Document d-1: sent to Jane (jane@example.com) is completed"));
        assert!(text.contains("Document d-2: sent to Bob (bob@example.com) is completed"));
        assert!(text.contains("  - document_opened at 2024-03-01T11:00:00+0000"));
        assert!(text.ends_with("Complete: true"));
    }

    #[tokio::test]
    async fn test_get_signature_pending_document() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/signatures/sig-2.json"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "sig-2",
                "created_at": "2024-03-01",
                "documents": [document_json("d-1", "Jane", "ready")]
            })))
            .mount(&server)
            .await;

        let tool = GetSignatureTool::new(client_for(&server));
        let text = tool
            .execute(&args(json!({"signature_id": "sig-2"})))
            .await
            .unwrap();

        assert!(text.ends_with("Complete: false"));
    }

    #[test]
    fn test_format_signature_without_documents_is_complete() {
        let request = SignatureRequest {
            id: SignatureId::new("sig-0"),
            created_at: "2024-01-01".to_string(),
            documents: vec![],
        };

        assert!(format_signature(&request).ends_with("Complete: true"));
    }

    #[tokio::test]
    async fn test_get_signature_bad_body_is_decoding_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/signatures/sig-3.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let tool = GetSignatureTool::new(client_for(&server));
        let result = tool.execute(&args(json!({"signature_id": "sig-3"}))).await;

        assert!(matches!(
            result,
            Err(ToolError::Api(SignaturitError::Decoding { .. }))
        ));
    }

    #[tokio::test]
    async fn test_create_signature_defaults_expiry_to_seven_days() {
        let server = MockServer::start().await;
        mount_create(
            &server,
            json!({
                "templates": ["#NDA", "abc123"],
                "recipients": [
                    {"name": "Jane", "email": "jane@example.com"},
                    {"name": "Bob", "email": "bob@example.com"}
                ],
                "expires_in": 7,
                "body": "Please sign",
                "subject": "NDA"
            }),
        )
        .await;

        let tool = CreateSignatureTool::new(client_for(&server));
        let text = tool.execute(&args(create_args())).await.unwrap();

        assert!(text.starts_with("Signature request sig-9 created from templates [#NDA, abc123]"));
        assert!(text.contains("Jane (jane@example.com), Bob (bob@example.com)"));
        assert!(text.contains("Document d-1"));

        let received = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert!(body.get("delivery_type").is_none());
        assert!(body.get("signing_mode").is_none());
    }

    #[tokio::test]
    async fn test_create_signature_forwards_supplied_expiry() {
        let server = MockServer::start().await;
        mount_create(&server, json!({"expires_in": 30})).await;

        let mut arguments = create_args();
        arguments["expires_in_days"] = json!(30);

        let tool = CreateSignatureTool::new(client_for(&server));
        tool.execute(&args(arguments)).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_signature_forwards_delivery_options() {
        let server = MockServer::start().await;
        mount_create(
            &server,
            json!({"delivery_type": "sms", "signing_mode": "parallel"}),
        )
        .await;

        let mut arguments = create_args();
        arguments["type"] = json!("sms");
        arguments["signing_mode"] = json!("parallel");

        let tool = CreateSignatureTool::new(client_for(&server));
        tool.execute(&args(arguments)).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_signature_verbatim_templates() {
        let server = MockServer::start().await;
        mount_create(&server, json!({"templates": ["#NDA", "", " abc123"]})).await;

        let mut arguments = create_args();
        arguments["templates"] = json!("#NDA,, abc123");

        let tool = CreateSignatureTool::new(client_for(&server));
        tool.execute(&args(arguments)).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_signature_trimmed_templates() {
        let server = MockServer::start().await;
        mount_create(&server, json!({"templates": ["#NDA", "abc123"]})).await;

        let mut arguments = create_args();
        arguments["templates"] = json!("#NDA,, abc123");

        let tool = CreateSignatureTool::new(client_for(&server))
            .with_template_split(ListSplitMode::Trimmed);
        tool.execute(&args(arguments)).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_signature_invalid_recipients() {
        let server = MockServer::start().await;

        let mut arguments = create_args();
        arguments["recipients"] = json!("[{\"name\":");

        let tool = CreateSignatureTool::new(client_for(&server));
        match tool.execute(&args(arguments)).await {
            Err(ToolError::Argument(err)) => {
                assert_eq!(err.field, "recipients");
                assert_eq!(err.reason, ArgumentReason::InvalidJson);
            }
            other => panic!("Expected Argument error, got {other:?}"),
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_signature_requires_subject() {
        let server = MockServer::start().await;

        let mut arguments = create_args();
        arguments.as_object_mut().unwrap().remove("subject");

        let tool = CreateSignatureTool::new(client_for(&server));
        let err = tool.execute(&args(arguments)).await.unwrap_err();

        assert_eq!(err.to_string(), "invalid argument `subject`: missing");
    }

    #[tokio::test]
    async fn test_create_signature_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/signatures.json"))
            .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"message":"Invalid template"}"#))
            .mount(&server)
            .await;

        let tool = CreateSignatureTool::new(client_for(&server));
        match tool.execute(&args(create_args())).await {
            Err(ToolError::Api(SignaturitError::Upstream { status, body })) => {
                assert_eq!(status, 422);
                assert_eq!(body, r#"{"message":"Invalid template"}"#);
            }
            other => panic!("Expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_reminder() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/signatures/sig-1/reminders.json"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SendSignatureReminderTool::new(client_for(&server));
        let text = tool
            .execute(&args(json!({"signature_id": "sig-1"})))
            .await
            .unwrap();

        assert_eq!(text, "Reminder sent for signature sig-1");
    }

    #[tokio::test]
    async fn test_cancel_signature_default_reason() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/signatures/sig-1.json"))
            .and(body_json(json!({"reason": ""})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let tool = CancelSignatureTool::new(client_for(&server));
        let text = tool
            .execute(&args(json!({"signature_id": "sig-1"})))
            .await
            .unwrap();

        assert_eq!(text, "Signature sig-1 canceled.");
    }

    #[tokio::test]
    async fn test_cancel_signature_with_reason() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/signatures/sig-1.json"))
            .and(body_json(json!({"reason": "Wrong recipient"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let tool = CancelSignatureTool::new(client_for(&server));
        let text = tool
            .execute(&args(json!({"signature_id": "sig-1", "reason": "Wrong recipient"})))
            .await
            .unwrap();

        assert_eq!(text, "Signature sig-1 canceled. Reason: Wrong recipient");
    }

    #[tokio::test]
    async fn test_cancel_signature_rejects_created_status() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/signatures/sig-1.json"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .mount(&server)
            .await;

        let tool = CancelSignatureTool::new(client_for(&server));
        let err = tool
            .execute(&args(json!({"signature_id": "sig-1"})))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unexpected status code: 201, body: {}");
    }
}
