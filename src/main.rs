// src/main.rs

//! The main entry point for the ListDB console.
//!
//! Reads one command per line from stdin, routes it through the engine and
//! prints the reply in the familiar `redis-cli` layout.

use anyhow::Result;
use bytes::Bytes;
use futures::StreamExt;
use listdb::config::Config;
use listdb::core::RespValue;
use listdb::core::protocol::RespFrame;
use listdb::{Router, ServerState};
use std::env;
use tokio::io::{AsyncWriteExt, stdin, stdout};
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) {
        println!("ListDB version {VERSION}");
        return Ok(());
    }

    // An explicit --config must load; otherwise fall back to ./config.toml or defaults.
    let config = match args
        .iter()
        .position(|arg| arg == "--config")
        .map(|i| args.get(i + 1))
    {
        Some(Some(path)) => match Config::from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load configuration from \"{path}\": {e:#}");
                std::process::exit(1);
            }
        },
        Some(None) => {
            eprintln!("--config flag requires a value");
            std::process::exit(1);
        }
        None => Config::from_file_or_default("config.toml")?,
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(true)
        .init();

    let state = ServerState::initialize(config)?;
    let router = Router::new(state);
    info!("ListDB {VERSION} ready, reading commands from stdin");

    let mut lines = FramedRead::new(stdin(), LinesCodec::new());
    let mut out = stdout();

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e.into());
            }
        };

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };
        if name.eq_ignore_ascii_case("quit") || name.eq_ignore_ascii_case("exit") {
            break;
        }

        let args: Vec<Bytes> = words
            .map(|w| Bytes::copy_from_slice(w.as_bytes()))
            .collect();
        let reply = router.dispatch(RespFrame::command(name, args)).await;

        let mut rendered = String::new();
        format_reply(&reply, 0, &mut rendered);
        out.write_all(rendered.as_bytes()).await?;
        out.flush().await?;
    }

    Ok(())
}

/// Appends the `redis-cli` rendering of `value` to `out`.
fn format_reply(value: &RespValue, indent: usize, out: &mut String) {
    match value {
        RespValue::SimpleString(s) => out.push_str(&format!("{s}\n")),
        RespValue::BulkString(b) => {
            out.push_str(&format!("\"{}\"\n", String::from_utf8_lossy(b)));
        }
        RespValue::Integer(i) => out.push_str(&format!("(integer) {i}\n")),
        RespValue::Null | RespValue::NullArray => out.push_str("(nil)\n"),
        RespValue::Error(e) => out.push_str(&format!("(error) {e}\n")),
        RespValue::Array(items) if items.is_empty() => out.push_str("(empty array)\n"),
        RespValue::Array(items) => {
            let width = items.len().to_string().len();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(&" ".repeat(indent));
                }
                let label = format!("{:>width$}) ", i + 1);
                out.push_str(&label);
                format_reply(item, indent + label.len(), out);
            }
        }
    }
}
