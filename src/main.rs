//! `cyber-profiler` - score an answers file and print the profile as JSON.
//!
//! The answers file looks like:
//!
//! ```json
//! {
//!   "answers": [{ "question_id": "iv-1", "option": "A", "latency_ms": 4200 }],
//!   "reflection": { "why_cyber": "...", "what_achieve": "..." },
//!   "activity": { "missions_completed": 3, "average_score": 82, "hours_spent": 5 }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use cyber_profiler::adapters::{
    InMemorySessionRepository, LlmNarrativeGenerator, OpenAIConfig, OpenAIProvider,
};
use cyber_profiler::application::{
    CompleteProfilingSessionCommand, CompleteProfilingSessionHandler, GenerateNarrativeCommand,
    GenerateNarrativeHandler, StartProfilingSessionCommand, StartProfilingSessionHandler,
    SubmitReflectionCommand, SubmitReflectionHandler, SubmitResponseCommand,
    SubmitResponseHandler,
};
use cyber_profiler::config::{AiConfig, AppConfig, LoggingConfig};
use cyber_profiler::domain::catalog::{QuestionCatalog, TrackKey};
use cyber_profiler::domain::foundation::{CommandMetadata, SessionId, UserId};
use cyber_profiler::domain::narrative::{ActivitySummary, FallbackNarrator, NarrativeInsights};
use cyber_profiler::domain::profiling::{Reflection, Response};
use cyber_profiler::domain::scoring::{ProfilingEngine, ProfilingResult};
use cyber_profiler::ports::{NarrativeGenerator, ProfilingSessionRepository};

#[derive(Parser)]
#[command(name = "cyber-profiler", about = "Score profiling answers and recommend a track")]
struct Cli {
    /// JSON file with answers, optional reflection and optional activity.
    answers: PathBuf,

    /// User the session is recorded for.
    #[arg(long, default_value = "cli-user")]
    user: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
struct AnswersFile {
    answers: Vec<Response>,
    #[serde(default)]
    reflection: Option<Reflection>,
    #[serde(default)]
    activity: Option<ActivityInput>,
}

/// Activity numbers; the track defaults to the recommended one.
#[derive(Debug, Deserialize)]
struct ActivityInput {
    track: Option<TrackKey>,
    display_name: Option<String>,
    #[serde(default)]
    missions_completed: u32,
    #[serde(default)]
    average_score: f64,
    #[serde(default)]
    hours_spent: f64,
    #[serde(default)]
    progress_percent: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    session_id: SessionId,
    #[serde(flatten)]
    result: ProfilingResult,
    narrative: NarrativeInsights,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {:#}", err);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.logging);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> anyhow::Result<AppConfig> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_answers(path: &Path) -> anyhow::Result<AnswersFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse answers file {}", path.display()))
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Arc<QuestionCatalog>> {
    match path {
        Some(path) => {
            let catalog = QuestionCatalog::from_yaml_file(path)
                .with_context(|| format!("failed to load question catalog {}", path.display()))?;
            Ok(Arc::new(catalog))
        }
        None => Ok(QuestionCatalog::builtin()),
    }
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let input = read_answers(&cli.answers)?;
    let user_id = UserId::new(cli.user).context("invalid --user")?;
    let metadata = CommandMetadata::new(user_id.clone()).with_source("cli");

    let catalog = load_catalog(config.scoring.catalog_path.as_deref())?;
    let engine = Arc::new(ProfilingEngine::new(config.scoring.parameters()));
    let repository: Arc<dyn ProfilingSessionRepository> = Arc::new(InMemorySessionRepository::new());

    let started = StartProfilingSessionHandler::new(repository.clone())
        .handle(
            StartProfilingSessionCommand {
                user_id: user_id.clone(),
            },
            metadata.clone(),
        )
        .await?;
    let session_id = *started.session.id();

    let submit = SubmitResponseHandler::new(catalog.clone(), engine.clone(), repository.clone());
    for response in input.answers {
        let question_id = response.question_id.clone();
        let cmd = SubmitResponseCommand {
            session_id,
            user_id: user_id.clone(),
            response,
        };
        if let Err(err) = submit.handle(cmd, metadata.clone()).await {
            tracing::warn!(%question_id, error = %err, "skipping answer");
        }
    }

    if let Some(reflection) = input.reflection {
        SubmitReflectionHandler::new(repository.clone())
            .handle(
                SubmitReflectionCommand {
                    session_id,
                    user_id: user_id.clone(),
                    reflection: Reflection::new(reflection.why_cyber, reflection.what_achieve),
                },
                metadata.clone(),
            )
            .await?;
    }

    let completed = CompleteProfilingSessionHandler::new(catalog, engine, repository.clone())
        .handle(
            CompleteProfilingSessionCommand {
                session_id,
                user_id: user_id.clone(),
            },
            metadata.clone(),
        )
        .await?;

    let activity = input.activity.and_then(|a| {
        let track = a.track.or_else(|| completed.result.primary_track.clone())?;
        Some(ActivitySummary {
            track,
            display_name: a.display_name,
            missions_completed: a.missions_completed,
            average_score: a.average_score,
            hours_spent: a.hours_spent,
            progress_percent: a.progress_percent,
        })
    });

    let narrative = GenerateNarrativeHandler::new(repository, narrative_generator(&config.ai))
        .handle(
            GenerateNarrativeCommand {
                session_id,
                user_id,
                activity,
            },
            metadata,
        )
        .await?;

    let report = Report {
        session_id,
        result: completed.result,
        narrative,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}

fn narrative_generator(ai: &AiConfig) -> Arc<dyn NarrativeGenerator> {
    let Some(key) = ai.openai_api_key.clone().filter(|_| ai.is_enabled()) else {
        return Arc::new(FallbackNarrator);
    };

    let provider_config = OpenAIConfig::from_secret(key)
        .with_model(ai.model.clone())
        .with_base_url(ai.base_url.clone())
        .with_timeout(ai.timeout())
        .with_max_retries(ai.max_retries);

    match OpenAIProvider::new(provider_config) {
        Ok(provider) => Arc::new(LlmNarrativeGenerator::new(Arc::new(provider), ai.timeout())),
        Err(err) => {
            tracing::warn!(error = %err, "narrative provider disabled");
            Arc::new(FallbackNarrator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_answers_file_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = read_answers(&path).unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("failed to read answers file"));
        assert!(message.contains("nope.json"));
    }

    #[test]
    fn malformed_answers_file_error_keeps_parse_cause() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"answers\": 3}}").unwrap();

        let err = read_answers(file.path()).unwrap_err();

        assert!(err.to_string().starts_with("failed to parse answers file"));
        assert!(err.chain().count() > 1);
    }

    #[test]
    fn reads_answers_with_optional_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"answers": [{{"question_id": "iv-1", "option": "A", "latency_ms": 4200}}]}}"#
        )
        .unwrap();

        let input = read_answers(file.path()).unwrap();

        assert_eq!(input.answers.len(), 1);
        assert!(input.reflection.is_none());
        assert!(input.activity.is_none());
    }

    #[test]
    fn catalog_defaults_to_builtin_and_reports_bad_path() {
        assert!(!load_catalog(None).unwrap().is_empty());

        let err = load_catalog(Some(Path::new("/no/such/catalog.yaml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/catalog.yaml"));
    }
}
