//! Signature request API endpoints.

use crate::client::SignaturitClient;
use crate::error::SignaturitResult;
use crate::transport::{OK, OK_OR_CREATED};
use serde::{Deserialize, Serialize};
use signaturit_core::types::{
    DeliveryType, Recipient, SignatureId, SignatureRequest, SigningMode,
};

/// Signatures API for creating and following signature requests.
pub struct SignaturesApi<'a> {
    client: &'a SignaturitClient,
}

impl<'a> SignaturesApi<'a> {
    pub(crate) fn new(client: &'a SignaturitClient) -> Self {
        Self { client }
    }

    /// Get a signature request with its documents and events.
    pub async fn get(&self, signature_id: &SignatureId) -> SignaturitResult<SignatureRequest> {
        self.client
            .http
            .get(&["signatures", &json_file(signature_id)])
            .await?
            .expect_status(OK_OR_CREATED)?
            .json()
    }

    /// Create a signature request from templates.
    pub async fn create(&self, request: &CreateSignatureRequest) -> SignaturitResult<SignatureRequest> {
        self.client
            .http
            .post(&["signatures.json"], request)
            .await?
            .expect_status(OK_OR_CREATED)?
            .json()
    }

    /// Send a reminder to the pending signers of a request.
    pub async fn remind(&self, signature_id: &SignatureId) -> SignaturitResult<()> {
        self.client
            .http
            .post_empty(&["signatures", &signature_id.0, "reminders.json"])
            .await?
            .expect_status(OK_OR_CREATED)?;
        Ok(())
    }

    /// Cancel an in-progress signature request.
    pub async fn cancel(
        &self,
        signature_id: &SignatureId,
        request: &CancelSignatureRequest,
    ) -> SignaturitResult<()> {
        self.client
            .http
            .patch(&["signatures", &json_file(signature_id)], request)
            .await?
            .expect_status(OK)?;
        Ok(())
    }
}

fn json_file(signature_id: &SignatureId) -> String {
    format!("{}.json", signature_id.0)
}

/// Request to create a signature request from templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSignatureRequest {
    pub templates: Vec<String>,
    pub recipients: Vec<Recipient>,
    /// Days until expiry, forwarded exactly as the caller gave it.
    pub expires_in: serde_json::Number,
    pub body: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_mode: Option<SigningMode>,
}

/// Request to cancel a signature request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelSignatureRequest {
    pub reason: String,
}
