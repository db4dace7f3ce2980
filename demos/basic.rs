//! Basic example demonstrating the WestFax API client.
//!
//! Run with:
//! ```
//! WESTFAX_USERNAME=user WESTFAX_PASSWORD=secret WESTFAX_PRODUCT_ID=id \
//!     cargo run --example basic
//! ```

use westfax::WestfaxClient;

#[tokio::main]
async fn main() -> westfax::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating WestFax client...");
    let client = WestfaxClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Round-trip an echo string
    println!("\n--- Ping ---");
    let pong = client.ping("hello westfax").await?;
    println!("Echoed: {} (Success={})", pong.result, pong.success);

    // List inbound faxes since a start date
    println!("\n--- Inbound faxes since 2022-01-11 ---");
    let inbound = client.get_inbound_fax_identifiers("2022-01-11").await?;
    println!("Found {} inbound faxes", inbound.len());

    for fax in &inbound {
        let status = fax.status.as_deref().unwrap_or("unknown");
        println!("  - {} ({} pages, {})", fax.id, fax.page_count, status);
    }

    // Fetch the full record for the first one
    if let Some(first) = inbound.iter().next() {
        println!("\n--- Fax details ---");
        let description = client.get_fax_description(&first.id).await?;
        let fax = description.into_inner();
        println!("Fax: {}", fax.id);
        println!("  Direction: {:?}", fax.direction);
        println!("  Date: {:?}", fax.date);
        println!("  Pages: {}", fax.page_count);
        println!("  Created via: {:?}", fax.created_via);

        // And the document payload
        println!("\n--- Document ---");
        let document = client.get_fax_document(&fax.id).await?;
        match document.result.first_file() {
            Some(file) => println!(
                "Got {} of {} ({} base64 chars)",
                file.content_type.as_deref().unwrap_or("unknown type"),
                file.content_length,
                file.file_contents.len()
            ),
            None => println!("No document attached"),
        }
    }

    println!("\nDone!");
    Ok(())
}
