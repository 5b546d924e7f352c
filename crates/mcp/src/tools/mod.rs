pub mod args;
pub mod contacts;
mod registry;
pub mod signatures;

pub use args::{Arguments, FromArguments, ListSplitMode};
pub use contacts::{
    CreateContactTool, DeleteContactTool, GetContactTool, ListContactsTool, UpdateContactTool,
};
pub use registry::{
    json_schema_enum, json_schema_number, json_schema_object, json_schema_string, Tool,
    ToolRegistry, ToolTier,
};
pub use signatures::{
    CancelSignatureTool, CreateSignatureTool, GetSignatureTool, SendSignatureReminderTool,
};

use signaturit_sdk::SignaturitClient;
use std::sync::Arc;

/// Behaviour switches for the tool set
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolOptions {
    /// How `create_signature` splits its `templates` argument
    pub template_split: ListSplitMode,
}

/// Register every contact and signature tool against one client
pub fn register_all(registry: &mut ToolRegistry, client: SignaturitClient, options: ToolOptions) {
    registry.register(Arc::new(ListContactsTool::new(client.clone())));
    registry.register(Arc::new(GetContactTool::new(client.clone())));
    registry.register(Arc::new(CreateContactTool::new(client.clone())));
    registry.register(Arc::new(UpdateContactTool::new(client.clone())));
    registry.register(Arc::new(DeleteContactTool::new(client.clone())));

    registry.register(Arc::new(GetSignatureTool::new(client.clone())));
    registry.register(Arc::new(
        CreateSignatureTool::new(client.clone()).with_template_split(options.template_split),
    ));
    registry.register(Arc::new(SendSignatureReminderTool::new(client.clone())));
    registry.register(Arc::new(CancelSignatureTool::new(client)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let client = SignaturitClient::builder().api_key("token").build().unwrap();
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, client, ToolOptions::default());

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "cancel_signature",
                "create_contact",
                "create_signature",
                "delete_contact",
                "get_contact",
                "get_signature",
                "list_contacts",
                "send_signature_reminder",
                "update_contact",
            ]
        );
    }

    #[test]
    fn test_required_parameters_declared() {
        let client = SignaturitClient::builder().api_key("token").build().unwrap();
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, client, ToolOptions::default());

        let create = registry.get("create_signature").unwrap().schema();
        let required: Vec<&str> = create.input_schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();

        assert_eq!(required, vec!["templates", "recipients", "body", "subject"]);
    }
}
