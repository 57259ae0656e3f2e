//! CLI entrypoint for review-autoreply
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use autoreply_application::{
    ActivityLog, AutoReplyService, BatchOptions, BatchProgressNotifier, GenerateInsightsUseCase,
    GenerateReplyUseCase, NoActivityLog, NoBatchProgress, RateLimiter, RateLimiterStore,
};
use autoreply_domain::config::validation::has_errors;
use autoreply_domain::{BusinessId, OutputFormat, ReviewInput};
use autoreply_infrastructure::{
    ConfigLoader, FileConfig, InMemoryRateLimiterStore, InMemoryReviewRepository,
    JsonlActivityLog, OpenAiCompatibleGateway, StaticBusinessSettings,
};
use autoreply_presentation::{
    Cli, Command, ConsoleFormatter, DigestArgs, JsonFormatter, OutputFormatter, ProgressReporter,
    ReplyArgs, SimpleProgress,
};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use serde_json::Value;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

type Service = AutoReplyService<OpenAiCompatibleGateway>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if has_errors(&issues) {
        bail!("Configuration is invalid");
    }

    if !config.output.use_color() {
        ConsoleFormatter::disable_color();
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let formatter: &dyn OutputFormatter = match config.output.resolve_format(cli.output) {
        OutputFormat::Text => &ConsoleFormatter,
        OutputFormat::Json => &JsonFormatter,
    };

    info!("Starting review-autoreply");
    let service = build_service(&config)?;

    let output = match command {
        Command::Reply(args) => {
            let show_progress = config.output.show_progress && !cli.quiet;
            run_reply(&service, &config, &args, formatter, show_progress).await?
        }
        Command::Digest(args) => run_digest(&service, &config, &args, formatter).await?,
    };

    println!("{}", output);

    Ok(())
}

/// Install the tracing subscriber.
///
/// `-v` flags pick the level; without them `RUST_LOG` applies, else `warn`.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("--log-file must name a file")?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(&directory)
        .with_context(|| format!("Cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

// === Dependency Injection ===
fn build_service(config: &FileConfig) -> Result<Service> {
    let provider = &config.provider;
    let api_key = provider.resolve_api_key();
    if api_key.is_none() {
        warn!(
            "No API key found in ${} or [provider].api_key; requests are sent unauthenticated",
            provider.api_key_env
        );
    }

    let gateway = Arc::new(OpenAiCompatibleGateway::new(
        &provider.base_url,
        provider.model.clone(),
        api_key,
        Duration::from_secs(provider.timeout_secs.max(1)),
    )?);
    info!("Using model {} at {}", gateway.model(), gateway.endpoint());

    let reply = GenerateReplyUseCase::new(gateway.clone()).with_params(config.generation.to_params());
    let insights = GenerateInsightsUseCase::new(gateway).with_params(config.insights.to_params());

    let activity_log: Arc<dyn ActivityLog> = match config
        .activity_log
        .resolve_path()
        .and_then(JsonlActivityLog::open)
    {
        Some(log) => {
            info!("Recording activity to {}", log.path().display());
            Arc::new(log)
        }
        None => Arc::new(NoActivityLog),
    };

    let store: Arc<dyn RateLimiterStore> = Arc::new(InMemoryRateLimiterStore::new());
    let rate_limiter = Arc::new(RateLimiter::new(store, config.rate_limit.to_config()));

    Ok(AutoReplyService::new(
        reply,
        insights,
        Arc::new(InMemoryReviewRepository::new()),
        activity_log,
        Arc::new(StaticBusinessSettings::from_config(&config.business)),
        rate_limiter,
    ))
}

async fn run_reply(
    service: &Service,
    config: &FileConfig,
    args: &ReplyArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<String> {
    let business_id = business_for(args.business.as_deref(), config);
    let inputs = match read_reviews(&args.file)? {
        ReviewsFile::One(input) => {
            let result = service.generate_single_reply(*input, &business_id).await?;
            return Ok(formatter.format_reply(&result));
        }
        ReviewsFile::Many(inputs) => inputs,
    };
    if inputs.is_empty() {
        bail!("{} contains no reviews", args.file.display());
    }

    let options = BatchOptions {
        chunk_size: args.chunk_size.unwrap_or(config.batch.chunk_size),
    };
    let reporter = ProgressReporter::new();
    let progress: &dyn BatchProgressNotifier = match show_progress {
        true if std::io::stderr().is_terminal() => &reporter,
        true => &SimpleProgress,
        false => &NoBatchProgress,
    };

    let batch = service
        .generate_batch_replies_with_progress(inputs, &business_id, options, progress)
        .await?;
    Ok(formatter.format_batch(&batch))
}

async fn run_digest(
    service: &Service,
    config: &FileConfig,
    args: &DigestArgs,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let business_id = business_for(args.business.as_deref(), config);
    let period = args.period(Utc::now().date_naive())?;
    let inputs = read_reviews(&args.file)?.into_vec();

    let bundle = service
        .generate_insights(inputs, &business_id, period)
        .await?;
    Ok(formatter.format_insights(&bundle, &period))
}

fn business_for(flag: Option<&str>, config: &FileConfig) -> BusinessId {
    flag.map(BusinessId::new)
        .unwrap_or_else(|| config.business.business_id())
}

/// Reviews file contents: one object or an array
#[derive(Debug)]
enum ReviewsFile {
    One(Box<ReviewInput>),
    Many(Vec<ReviewInput>),
}

impl ReviewsFile {
    fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Reviews file is not valid JSON")?;
        match value {
            Value::Array(items) => {
                let inputs = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        serde_json::from_value(item)
                            .with_context(|| format!("Review #{} has an invalid shape", i + 1))
                    })
                    .collect::<Result<Vec<ReviewInput>>>()?;
                Ok(ReviewsFile::Many(inputs))
            }
            Value::Object(_) => {
                let input = serde_json::from_value(value).context("Review has an invalid shape")?;
                Ok(ReviewsFile::One(Box::new(input)))
            }
            _ => bail!("Expected a review object or an array of reviews"),
        }
    }

    fn into_vec(self) -> Vec<ReviewInput> {
        match self {
            ReviewsFile::One(input) => vec![*input],
            ReviewsFile::Many(inputs) => inputs,
        }
    }
}

fn read_reviews(path: &Path) -> Result<ReviewsFile> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read reviews from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    ReviewsFile::parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_review() {
        let file = ReviewsFile::parse(
            r#"{"id": "r1", "rating": 5, "text": "Great!", "customerName": "Amy"}"#,
        )
        .unwrap();
        match file {
            ReviewsFile::One(input) => assert_eq!(input.id.as_deref(), Some("r1")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_review_array() {
        let file = ReviewsFile::parse(
            r#"[
                {"id": "r1", "rating": 5, "text": "Great!", "customerName": "Amy"},
                {"id": "r2", "rating": 2, "comment": "Slow", "reviewerName": "Bo"}
            ]"#,
        )
        .unwrap();
        let inputs = file.into_vec();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[1].text.as_deref(), Some("Slow"));
        assert_eq!(inputs[1].customer_name.as_deref(), Some("Bo"));
    }

    #[test]
    fn test_parse_rejects_scalars() {
        assert!(ReviewsFile::parse("42").is_err());
        assert!(ReviewsFile::parse("not json").is_err());
    }
}
