//! Benchmark suite for comparing import formats
//!
//! This benchmark compares the cost of the bulk-import pipeline across
//! the three supported formats using the divan benchmarking framework.
//! Documents are generated in memory before measurement, so the numbers
//! cover extraction, normalization, validation, and storage only.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Batches
//!
//! Two synthetic batch sizes are used per format:
//! - small: 100 valid rows
//! - large: 2,500 valid rows

use ledgerdesk::{import_tickets, ImportFormat, TicketStore};
use serde_json::{json, Value};

const SMALL: usize = 100;
const LARGE: usize = 2_500;

fn main() {
    divan::main();
}

fn csv_document(rows: usize) -> String {
    let mut doc = String::from(
        "subject,description,customer_id,customer_email,customer_name,category,priority,tags,source\n",
    );
    for i in 0..rows {
        doc.push_str(&format!(
            "Ticket {i} cannot log in,The login page rejects the password for request number {i}.,CUST-{i:05},user{i}@example.com,User {i},account_access,high,\"login, password\",web_form\n"
        ));
    }
    doc
}

fn json_document(rows: usize) -> String {
    let rows: Vec<Value> = (0..rows)
        .map(|i| {
            json!({
                "subject": format!("Ticket {i} cannot log in"),
                "description": format!("The login page rejects the password for request number {i}."),
                "customer_id": format!("CUST-{i:05}"),
                "customer_email": format!("user{i}@example.com"),
                "customer_name": format!("User {i}"),
                "category": "account_access",
                "priority": "high",
                "tags": ["login", "password"],
                "metadata": {"source": "web_form"}
            })
        })
        .collect();
    Value::Array(rows).to_string()
}

fn xml_document(rows: usize) -> String {
    let mut doc = String::from("<tickets>");
    for i in 0..rows {
        doc.push_str(&format!(
            "<ticket>\
             <subject>Ticket {i} cannot log in</subject>\
             <description>The login page rejects the password for request number {i}.</description>\
             <customer_id>CUST-{i:05}</customer_id>\
             <customer_email>user{i}@example.com</customer_email>\
             <customer_name>User {i}</customer_name>\
             <category>account_access</category>\
             <priority>high</priority>\
             <tags><tag>login</tag><tag>password</tag></tags>\
             <metadata><source>web_form</source></metadata>\
             </ticket>"
        ));
    }
    doc.push_str("</tickets>");
    doc
}

fn run_import(format: ImportFormat, document: &str) {
    let mut store = TicketStore::new();
    let result = import_tickets(&mut store, format, document.as_bytes());
    assert_eq!(result.error_count, 0);
}

/// Benchmark CSV import with a small batch (100 rows)
#[divan::bench]
fn csv_import_small(bencher: divan::Bencher) {
    let document = csv_document(SMALL);
    bencher.bench_local(|| run_import(ImportFormat::Csv, &document));
}

/// Benchmark CSV import with a large batch (2,500 rows)
#[divan::bench]
fn csv_import_large(bencher: divan::Bencher) {
    let document = csv_document(LARGE);
    bencher.bench_local(|| run_import(ImportFormat::Csv, &document));
}

/// Benchmark JSON import with a small batch (100 rows)
#[divan::bench]
fn json_import_small(bencher: divan::Bencher) {
    let document = json_document(SMALL);
    bencher.bench_local(|| run_import(ImportFormat::Json, &document));
}

/// Benchmark JSON import with a large batch (2,500 rows)
#[divan::bench]
fn json_import_large(bencher: divan::Bencher) {
    let document = json_document(LARGE);
    bencher.bench_local(|| run_import(ImportFormat::Json, &document));
}

/// Benchmark XML import with a small batch (100 rows)
#[divan::bench]
fn xml_import_small(bencher: divan::Bencher) {
    let document = xml_document(SMALL);
    bencher.bench_local(|| run_import(ImportFormat::Xml, &document));
}

/// Benchmark XML import with a large batch (2,500 rows)
#[divan::bench]
fn xml_import_large(bencher: divan::Bencher) {
    let document = xml_document(LARGE);
    bencher.bench_local(|| run_import(ImportFormat::Xml, &document));
}
