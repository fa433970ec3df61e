//! Integration tests against a live Payables backend.
//!
//! These tests require a running backend and a valid token and are ignored
//! by default. To run them, create a `.env` file in the payables-lib
//! directory with:
//!
//! ```env
//! PAYABLES_URL=https://payables.example.com
//! PAYABLES_TOKEN=your-bearer-token
//! ```
//!
//! Then run: `cargo test -p payables-lib -- --ignored`

use std::env;

use payables_lib::PayablesClient;
use payables_lib::screens::ExtractionQueue;
use payables_lib::session::StaticSession;

fn load_env() -> Option<(String, String)> {
    let _ = dotenvy::dotenv();

    let url = env::var("PAYABLES_URL").ok()?;
    let token = env::var("PAYABLES_TOKEN").ok()?;

    Some((url, token))
}

fn client() -> PayablesClient {
    let (url, token) = load_env().expect("Missing required environment variables. See module docs.");
    PayablesClient::builder()
        .url(url)
        .session(StaticSession::new(token))
        .build()
}

#[tokio::test]
#[ignore = "requires a running backend configured in .env"]
async fn test_connect() {
    let profile = client().connect().await.expect("connect failed");
    assert!(!profile.display_name.is_empty());

    println!("Signed in as {} ({})", profile.display_name, profile.role);
}

#[tokio::test]
#[ignore = "requires a running backend configured in .env"]
async fn test_invoice_queue_roundtrip() {
    let client = client();

    let invoices = client
        .list_invoices(None)
        .await
        .expect("listing invoices failed");

    let mut queue = ExtractionQueue::new(&invoices);
    queue.table_mut().toggle_sort("total");
    let table = queue.table().view();

    assert!(table.total_pages() >= 1);
    println!(
        "{} invoices, {} open, {} pages",
        invoices.len(),
        ExtractionQueue::open_count(&invoices),
        table.total_pages()
    );
}

#[tokio::test]
#[ignore = "requires a running backend configured in .env"]
async fn test_match_result_fetch() {
    let client = client();

    let invoices = client
        .list_invoices(None)
        .await
        .expect("listing invoices failed");

    let Some(invoice) = invoices.first() else {
        println!("No invoices available, skipping match fetch");
        return;
    };

    let result = client
        .match_result(invoice.id)
        .await
        .expect("fetching match result failed");

    let stats = result.stats();
    assert_eq!(
        stats.total,
        stats.matched + stats.mismatched + stats.missing
    );
    println!("Match outcome for {}: {}", invoice.invoice_number, result.outcome);
}
