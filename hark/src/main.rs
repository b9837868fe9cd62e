#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod output;

use anyhow::{Context, bail};
use args::Args;
use clap::Parser;
use output::OutputTarget;
use secrecy::SecretString;
use stt::{Task, TranscriptionRequest, WhisperClient, render};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    if !args.file.is_file() {
        bail!("audio file '{}' does not exist", args.file.display());
    }

    let api_key = args
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
        .context("no API key given; pass --api-key or set OPENAI_API_KEY")?;

    let task = if args.translate { Task::Translate } else { Task::Transcribe };

    tracing::debug!(
        "submitting {} (task={task:?}, format={})",
        args.file.display(),
        args.response_format,
    );

    let request = TranscriptionRequest {
        file: args.file.clone(),
        model: args.model,
        language: args.language,
        prompt: args.prompt,
        response_format: args.response_format,
        temperature: args.temperature,
        word_timestamps: args.word_timestamps,
        task,
    };

    let client = WhisperClient::new(api_key, args.base_url);
    let response = client.submit(&request).await?;

    tracing::debug!("rendering {} response ({} bytes)", args.response_format, response.body.len());

    let content = render(args.response_format, &response.body);

    let target = OutputTarget::resolve(args.output.as_deref(), &args.file, args.response_format);
    target.write(&content)?;

    Ok(())
}

/// Set up stderr logging; stdout belongs to the transcript
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
