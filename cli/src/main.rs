use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use wire::{Attachment, Language, Verdict, VerificationRequest, VerificationResult};

/// Same budget the browser form gives the verification service.
const VERIFY_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("nothing to verify; pass --text and/or --file")]
    EmptyRequest,
    #[error("failed to read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {path}")]
    Status { status: u16, path: &'static str },
    #[error("verification failed: {0}")]
    Verification(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "veritas-cli", about = "VERITAS news verification CLI")]
struct Cli {
    #[arg(long, env = "VERITAS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the gateway is up.
    Ping,
    /// Submit text and/or a file for verification.
    Verify(VerifyCommand),
    /// Print the reporting-view data.
    Dashboard,
}

#[derive(Args, Debug)]
struct VerifyCommand {
    /// News text to check.
    #[arg(long)]
    text: Option<String>,
    /// Image, audio, video or document to upload.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Output language code (auto, en, hi, gu, bn, mr, ta, te, pa, kn).
    #[arg(long, default_value = "auto")]
    lang: Language,
    /// Print the raw JSON reply instead of the verdict block.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Verify(verify) => run_verify(&cli.base_url, verify).await,
        Command::Dashboard => run_dashboard(&cli.base_url).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(wire::endpoint(base_url, wire::HEALTH_PATH)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), path: wire::HEALTH_PATH });
    }
    println!("ok");
    Ok(())
}

async fn run_verify(base_url: &str, cmd: VerifyCommand) -> Result<(), CliError> {
    if cmd.text.is_none() && cmd.file.is_none() {
        return Err(CliError::EmptyRequest);
    }
    let attachment = match &cmd.file {
        Some(path) => Some(read_attachment(path).await?),
        None => None,
    };
    let request = VerificationRequest::new(cmd.text.unwrap_or_default(), cmd.lang, attachment);

    let client = reqwest::Client::builder().timeout(VERIFY_TIMEOUT).build()?;
    let response = client
        .post(wire::endpoint(base_url, wire::VERIFY_PATH))
        .multipart(wire::multipart::into_form(request)?)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    if cmd.json {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => print_json(&value)?,
            Err(_) => println!("{body}"),
        }
    }
    match wire::decode_response(status, &body) {
        VerificationResult::Success(verdict) => {
            if !cmd.json {
                print!("{}", format_verdict(&verdict));
            }
            Ok(())
        }
        VerificationResult::Failure { message } => Err(CliError::Verification(message)),
    }
}

async fn run_dashboard(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(wire::endpoint(base_url, wire::DASHBOARD_PATH)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), path: wire::DASHBOARD_PATH });
    }
    let value = response.json::<Value>().await?;
    print_json(&value)
}

async fn read_attachment(path: &Path) -> Result<Attachment, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })?;
    Ok(attachment_for(path, bytes))
}

fn attachment_for(path: &Path, bytes: Vec<u8>) -> Attachment {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let media_type = wire::media_type_for_path(&file_name).to_owned();
    Attachment { file_name, media_type, bytes }
}

fn format_verdict(verdict: &Verdict) -> String {
    let mut out = format!(
        "Verdict: {}\nAnalysis: {}\nEvidence: {}\n",
        verdict.verdict, verdict.analysis, verdict.evidence
    );
    if let Some(text) = &verdict.extracted_text {
        out.push_str(&format!("Extracted text: {text}\n"));
    }
    out
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
