//! Basic usage example for the Chroma binding

use chroma_binding::prelude::*;
use std::collections::HashMap;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize observability
    chroma_binding::observability::init_observability("info", "pretty");

    println!("=== Chroma Binding Basic Usage Example ===\n");

    let mut properties = HashMap::new();
    properties.insert(
        "url".to_string(),
        std::env::var("CHROMA_URL").unwrap_or_else(|_| "http://localhost:8000".to_string()),
    );
    properties.insert("operationTimeout".to_string(), "10s".to_string());
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        properties.insert("openAIApiKey".to_string(), key);
    }

    println!("1. Initializing binding...");
    let binding = ChromaBinding::init(&properties)?;
    println!("   ✓ Supported operations: {}", OperationKind::supported_list());

    println!("\n2. Checking server...");
    for op in ["version", "heartbeat"] {
        let response = binding.invoke(&InvokeRequest::new(op)).await?;
        println!(
            "   ✓ {}: {} ({})",
            op,
            String::from_utf8_lossy(&response.data),
            response.metadata["duration"]
        );
    }

    println!("\n3. Creating a collection...");
    let create = InvokeRequest::new("createCollection").with_data(
        r#"{"name":"demo","getOrCreate":true,"embeddingFunction":"openai","distanceFunction":"cosine"}"#,
    );
    match binding.invoke(&create).await {
        Ok(response) => println!("   ✓ {}", String::from_utf8_lossy(&response.data)),
        Err(BindingError::Credential(e)) => {
            println!("   ✗ {} (set OPENAI_API_KEY to create collections)", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    println!("\n4. Listing collections...");
    let response = binding.invoke(&InvokeRequest::new("listCollections")).await?;
    println!("   ✓ {}", String::from_utf8_lossy(&response.data));

    println!("\n5. Deleting the collection...");
    let response = binding
        .invoke(&InvokeRequest::new("deleteCollection").with_data(r#"{"name":"demo"}"#))
        .await?;
    println!("   ✓ {}", String::from_utf8_lossy(&response.data));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
