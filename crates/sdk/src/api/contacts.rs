//! Contacts API endpoints.

use crate::client::SignaturitClient;
use crate::error::SignaturitResult;
use crate::transport::{OK, OK_OR_CREATED};
use serde::{Deserialize, Serialize};
use signaturit_core::types::{Contact, ContactId};

/// Contacts API for managing the account address book.
pub struct ContactsApi<'a> {
    client: &'a SignaturitClient,
}

impl<'a> ContactsApi<'a> {
    pub(crate) fn new(client: &'a SignaturitClient) -> Self {
        Self { client }
    }

    /// List all contacts.
    pub async fn list(&self) -> SignaturitResult<Vec<Contact>> {
        self.client
            .http
            .get(&["contacts.json"])
            .await?
            .expect_status(OK)?
            .json()
    }

    /// Get a single contact by ID.
    pub async fn get(&self, contact_id: &ContactId) -> SignaturitResult<Contact> {
        self.client
            .http
            .get(&["contacts", &json_file(contact_id)])
            .await?
            .expect_status(OK)?
            .json()
    }

    /// Create a new contact.
    pub async fn create(&self, request: &CreateContactRequest) -> SignaturitResult<Contact> {
        self.client
            .http
            .post(&["contacts.json"], request)
            .await?
            .expect_status(OK_OR_CREATED)?
            .json()
    }

    /// Update an existing contact. Unset fields are left untouched.
    pub async fn update(
        &self,
        contact_id: &ContactId,
        request: &UpdateContactRequest,
    ) -> SignaturitResult<Contact> {
        self.client
            .http
            .patch(&["contacts", &json_file(contact_id)], request)
            .await?
            .expect_status(OK)?
            .json()
    }

    /// Delete a contact. The response body is not inspected.
    pub async fn delete(&self, contact_id: &ContactId) -> SignaturitResult<()> {
        self.client
            .http
            .delete(&["contacts", &json_file(contact_id)])
            .await?
            .expect_status(OK)?;
        Ok(())
    }
}

fn json_file(contact_id: &ContactId) -> String {
    format!("{}.json", contact_id.0)
}

/// Request to create a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContactRequest {
    pub email: String,
    pub name: String,
}

/// Request to update a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
