// Contact tools: list, get, create, update and delete address book entries

use crate::error::{ArgumentError, ToolError};
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, json_schema_string, Arguments, FromArguments, Tool, ToolTier};
use signaturit_core::types::{Contact, ContactId};
use signaturit_sdk::api::{CreateContactRequest, UpdateContactRequest};
use signaturit_sdk::SignaturitClient;

/// `name (email) [ID: id]`
pub fn format_contact(contact: &Contact) -> String {
    format!("{} ({}) [ID: {}]", contact.name, contact.email, contact.id)
}

/// Tool to list every contact
pub struct ListContactsTool {
    client: SignaturitClient,
}

impl ListContactsTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListContactsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_contacts".to_string(),
            description: "Get all contacts from your Signaturit account".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<String, ToolError> {
        let contacts = self.client.contacts().list().await?;

        if contacts.is_empty() {
            return Ok("No contacts found.".to_string());
        }

        let mut summary = String::from("Contacts:\n");
        for contact in &contacts {
            summary.push_str(&format!("- {}\n", format_contact(contact)));
        }
        Ok(summary)
    }
}

#[derive(Debug)]
struct ContactIdArgs {
    contact_id: ContactId,
}

impl FromArguments for ContactIdArgs {
    fn from_arguments(args: &Arguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            contact_id: ContactId::new(args.required_str("contact_id")?),
        })
    }
}

/// Tool to fetch a single contact
pub struct GetContactTool {
    client: SignaturitClient,
}

impl GetContactTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetContactTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_contact".to_string(),
            description: "Get a single contact by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "contact_id": json_schema_string(
                        "ID of the contact to retrieve (e.g., e8125099-871e-11e6-88d5-06875124f8dd)"
                    )
                }),
                vec!["contact_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: ContactIdArgs = arguments.decode()?;
        let contact = self.client.contacts().get(&args.contact_id).await?;
        Ok(format!("Contact: {}", format_contact(&contact)))
    }
}

#[derive(Debug)]
struct CreateContactArgs {
    email: String,
    name: String,
}

impl FromArguments for CreateContactArgs {
    fn from_arguments(args: &Arguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            email: args.required_str("email")?,
            name: args.required_str("name")?,
        })
    }
}

/// Tool to add a contact
pub struct CreateContactTool {
    client: SignaturitClient,
}

impl CreateContactTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateContactTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_contact".to_string(),
            description: "Create a new contact in your Signaturit account".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "email": json_schema_string("Email of the new contact (e.g., john.doe@signaturit.com)"),
                    "name": json_schema_string("Name of the new contact (e.g., John Doe)")
                }),
                vec!["email", "name"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: CreateContactArgs = arguments.decode()?;
        let request = CreateContactRequest {
            email: args.email,
            name: args.name,
        };

        let contact = self.client.contacts().create(&request).await?;
        Ok(format!("Contact created: {}", format_contact(&contact)))
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier1
    }
}

#[derive(Debug)]
struct UpdateContactArgs {
    contact_id: ContactId,
    email: Option<String>,
    name: Option<String>,
}

impl FromArguments for UpdateContactArgs {
    fn from_arguments(args: &Arguments) -> Result<Self, ArgumentError> {
        Ok(Self {
            contact_id: ContactId::new(args.required_str("contact_id")?),
            email: args.optional_non_empty_str("email")?,
            name: args.optional_non_empty_str("name")?,
        })
    }
}

/// Tool to change a contact's email or name
pub struct UpdateContactTool {
    client: SignaturitClient,
}

impl UpdateContactTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateContactTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_contact".to_string(),
            description: "Update an existing contact's information".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "contact_id": json_schema_string("ID of the contact to update"),
                    "email": json_schema_string("New email for the contact (optional)"),
                    "name": json_schema_string("New name for the contact (optional)")
                }),
                vec!["contact_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: UpdateContactArgs = arguments.decode()?;
        let request = UpdateContactRequest {
            email: args.email,
            name: args.name,
        };

        let contact = self.client.contacts().update(&args.contact_id, &request).await?;
        Ok(format!("Contact updated: {}", format_contact(&contact)))
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier1
    }
}

/// Tool to remove a contact
pub struct DeleteContactTool {
    client: SignaturitClient,
}

impl DeleteContactTool {
    pub fn new(client: SignaturitClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteContactTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete_contact".to_string(),
            description: "Delete a contact from your Signaturit account".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "contact_id": json_schema_string("ID of the contact to delete")
                }),
                vec!["contact_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError> {
        let args: ContactIdArgs = arguments.decode()?;
        self.client.contacts().delete(&args.contact_id).await?;
        Ok(format!("Contact {} successfully deleted", args.contact_id))
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier2
    }
}
