use super::event::AppEvent;
use super::format::OutputFormat;
use super::mode::AppMode;
use crate::input::{self, LoadError};
use crate::pipeline::{Pipeline, Report};

pub const HELP_TEXT: &str = "\
Commands:
  <text>     classify a sentence
  @<file>    classify every non-blank line of a file
  @@         classify the clipboard contents
  :h, :help  show this help
  :q, :quit  exit";

/// What the front end should print after an event.
#[derive(Debug)]
pub enum AppOutput {
    Reports(Vec<Report>),
    Message(String),
    Warning(String),
    Nothing,
}

pub struct App {
    pub mode: AppMode,
    pub format: OutputFormat,
    pipeline: Pipeline,
}

impl App {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            mode: AppMode::Repl,
            format: OutputFormat::default(),
            pipeline,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn handle_event(&mut self, event: AppEvent) -> AppOutput {
        match event {
            AppEvent::Classify(text) => AppOutput::Reports(vec![self.pipeline.classify(&text)]),
            AppEvent::LoadFile(path) => self.classify_loaded(input::sentences::load(&path)),
            AppEvent::LoadClipboard => self.classify_loaded(input::clipboard::load()),
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                AppOutput::Nothing
            }
            AppEvent::Help => AppOutput::Message(HELP_TEXT.to_string()),
            AppEvent::InvalidCommand(command) => {
                tracing::warn!(%command, "unknown command");
                AppOutput::Warning(format!("Unknown command: {command} (:h for help)"))
            }
            AppEvent::None => AppOutput::Nothing,
        }
    }

    fn classify_loaded(&self, loaded: Result<Vec<String>, LoadError>) -> AppOutput {
        match loaded {
            Ok(lines) => AppOutput::Reports(self.pipeline.classify_batch(&lines)),
            Err(err) => {
                tracing::warn!(error = %err, "could not load input");
                AppOutput::Warning(err.to_string())
            }
        }
    }
}
