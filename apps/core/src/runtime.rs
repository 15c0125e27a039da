use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::action_executor::executor_handler;
use crate::config::{self, ConfigError};
use crate::contract::SearchResponse;
use crate::core_service::{CoreService, ServiceError};
use crate::session::SearchSession;

const CMD_UP: &str = ":up";
const CMD_DOWN: &str = ":down";
const CMD_ENTER: &str = ":enter";
const CMD_QUIT: &str = ":quit";

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RuntimeError {
    /// Process exit code: 2 for configuration problems, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Service(ServiceError::Config(_)) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub json: bool,
    /// One-shot query; `None` starts the interactive loop.
    pub query: Option<String>,
}

pub fn run_with_options(options: RunOptions) -> Result<(), RuntimeError> {
    let config = config::load(options.config_path.as_deref())?;
    crate::logging::init(&config.log_filter).map_err(RuntimeError::Logging)?;
    tracing::debug!(config_path = %config.config_path.display(), "config loaded");

    let service = Arc::new(CoreService::new(config)?);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(service, &options, stdin.lock(), stdout.lock())
}

/// Drives a [`SearchSession`] from `input`, writing rendered results to
/// `output`. A one-shot query in `options` skips reading `input`.
pub fn run_with_io<R: BufRead, W: Write>(
    service: Arc<CoreService>,
    options: &RunOptions,
    input: R,
    mut output: W,
) -> Result<(), RuntimeError> {
    let mut session = SearchSession::new(service, executor_handler());

    if let Some(query) = &options.query {
        let now = Instant::now();
        session.input(query, now);
        session.flush(now);
        return render(&session, options.json, &mut output);
    }

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            CMD_QUIT => break,
            CMD_UP => session.move_up(),
            CMD_DOWN => session.move_down(),
            CMD_ENTER => {
                match session.selected() {
                    Some(item) => writeln!(output, "-> {}", item.action)?,
                    None => writeln!(output, "(no results)")?,
                }
                session.activate();
                continue;
            }
            _ => {
                let now = Instant::now();
                session.input(&line, now);
                session.flush(now);
            }
        }
        render(&session, options.json, &mut output)?;
    }

    Ok(())
}

fn render<W: Write>(
    session: &SearchSession,
    json: bool,
    output: &mut W,
) -> Result<(), RuntimeError> {
    if json {
        let response = SearchResponse::new(
            session.query(),
            session.selected_index(),
            session.visible_results(),
        );
        serde_json::to_writer(&mut *output, &response)?;
        writeln!(output)?;
        return Ok(());
    }

    let results = session.visible_results();
    if results.is_empty() {
        writeln!(output, "(no results)")?;
        return Ok(());
    }
    for (index, item) in results.iter().enumerate() {
        let marker = if index == session.selected_index() { '>' } else { ' ' };
        let shortcut = item.shortcut.as_deref().unwrap_or_default();
        writeln!(output, "{marker} [{}] {}  {shortcut}", item.icon, item.title)?;
    }
    Ok(())
}
