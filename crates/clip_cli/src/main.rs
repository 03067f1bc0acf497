//! Command-line client for the clip API.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use clip_core::DEFAULT_CLI_SERVER_URL;
use serde_json::Value;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "clipc", about = "clip pastebin client", version)]
struct Cli {
    /// Server URL (can also be set via CLIP_SERVER env var)
    #[arg(short, long, env = "CLIP_SERVER", default_value = DEFAULT_CLI_SERVER_URL)]
    server: String,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print a paste (the default paste when KEY is omitted)
    Get { key: Option<String> },
    /// Store stdin or a file as a paste (the default paste when KEY is omitted)
    Set {
        key: Option<String>,
        #[arg(short, long)]
        file: Option<String>,
    },
}

fn error_message_for_response(status: reqwest::StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return value
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or(body)
            .to_string();
    }

    body.trim_end().to_string()
}

async fn ensure_success_or_exit(res: reqwest::Response, action: &str) -> reqwest::Response {
    let status = res.status();
    if status.is_success() {
        return res;
    }

    let body = match res.text().await {
        Ok(body) => body,
        Err(err) => format!("failed to read error response body: {}", err),
    };
    let message = error_message_for_response(status, &body);
    eprintln!("{} failed ({}): {}", action, status, message);
    std::process::exit(1);
}

/// Build `/@` or `/@/<key>` on top of the server base URL.
fn paste_url(server: &str, key: Option<&str>) -> Result<reqwest::Url, String> {
    let mut url = reqwest::Url::parse(server.trim())
        .map_err(|err| format!("Invalid server URL '{}': {}", server, err))?;
    let mut path = url
        .path_segments_mut()
        .map_err(|_| "Server URL cannot be used as an API base".to_string())?;
    path.pop_if_empty();
    path.push("@");
    if let Some(key) = key {
        path.push(key);
    }
    drop(path);
    Ok(url)
}

fn paste_url_or_exit(server: &str, action: &str, key: Option<&str>) -> reqwest::Url {
    match paste_url(server, key) {
        Ok(url) => url,
        Err(message) => {
            eprintln!("{} failed: {}", action, message);
            std::process::exit(1);
        }
    }
}

fn read_input(file: Option<&str>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        server,
        timeout,
        command,
    } = Cli::parse();

    if let Commands::Completions { shell } = &command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout))
        .build()?;

    match command {
        Commands::Completions { .. } => unreachable!("completions handled before client setup"),
        Commands::Get { key } => {
            let endpoint = paste_url_or_exit(&server, "Get", key.as_deref());
            let res = client.get(endpoint).send().await?;
            let res = ensure_success_or_exit(res, "Get").await;
            let body = res.bytes().await?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&body)?;
            stdout.flush()?;
        }
        Commands::Set { key, file } => {
            let endpoint = paste_url_or_exit(&server, "Set", key.as_deref());
            let content = read_input(file.as_deref())?;
            if content.is_empty() {
                eprintln!("Set failed: input is empty");
                std::process::exit(1);
            }
            let res = client.post(endpoint).body(content).send().await?;
            ensure_success_or_exit(res, "Set").await;
        }
    }

    Ok(())
}
