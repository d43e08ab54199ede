//! Search a node and print the hits
//!
//! Run with: cargo run --example search -- <node-url> <phrase> [max]

use anyhow::{bail, Context};
use estraier_http::{Condition, NodeClient, SearchOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: search <node-url> <phrase> [max]");
    }
    let max: i64 = match args.get(2) {
        Some(max) => max.parse().context("max must be a number")?,
        None => 10,
    };

    let client = NodeClient::from_node_url(&args[0])?;
    let cond = Condition::new()
        .with_phrase(&args[1])
        .with_options(SearchOptions::SIMPLE)
        .with_max(max);

    let result = client
        .search(&cond, 0)
        .await
        .with_context(|| format!("search failed (status {:?})", client.status()))?;

    println!(
        "{} hits, showing {}",
        result.hint("HIT").unwrap_or("0"),
        result.doc_num()
    );
    for doc in &result {
        println!();
        println!("{}", doc.uri());
        if let Some(title) = doc.attribute("@title") {
            println!("  {}", title);
        }
        for (text, normalized) in doc.snippet_lines() {
            match normalized {
                Some(_) => print!("[{}]", text),
                None if text.is_empty() => print!(" ... "),
                None => print!("{}", text),
            }
        }
        println!();
    }

    Ok(())
}
