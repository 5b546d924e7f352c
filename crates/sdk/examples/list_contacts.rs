//! List contacts and inspect a signature request.
//!
//! Run with:
//! SIGNATURIT_SECRET_TOKEN=... cargo run --example list_contacts -- [signature-id]

use signaturit_sdk::{SignatureId, SignaturitClient, SignaturitError, SignaturitResult};

#[tokio::main]
async fn main() -> SignaturitResult<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("SIGNATURIT_SECRET_TOKEN")
        .map_err(|_| SignaturitError::Config("SIGNATURIT_SECRET_TOKEN is not set".to_string()))?;

    // Sandbox keeps the example away from real documents
    let client = SignaturitClient::builder()
        .api_key(token)
        .sandbox(true)
        .build()?;

    println!("Listing contacts...");
    for contact in client.contacts().list().await? {
        println!("  {} <{}> [{}]", contact.name, contact.email, contact.id);
    }

    if let Some(id) = std::env::args().nth(1) {
        let request = client.signatures().get(&SignatureId::new(id)).await?;
        println!("\nSignature {} created at {}", request.id, request.created_at);
        for document in &request.documents {
            println!("  {} -> {} ({})", document.id, document.email, document.status);
        }
        println!("Complete: {}", request.is_complete());
    }

    Ok(())
}
