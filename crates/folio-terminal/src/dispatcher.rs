//! Line dispatch: echo, resolve, execute, render.

use folio_types::config::TerminalConfig;

use crate::interpreter::{Environment, tokenize};
use crate::output::LineKind;

/// The one line that is refused outright, before any lookup.
pub const DESTRUCTIVE_LINE: &str = "sudo rm -rf /";

/// Reply to [`DESTRUCTIVE_LINE`].
pub const REFUSAL: &str = "no... please dont not do that";

/// What happened to a dispatched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Blank line; nothing echoed.
    Ignored,
    /// Contained the cancel marker; echoed only.
    Interrupted,
    /// The destructive Easter egg.
    Refused,
    /// No such command.
    NotFound(String),
    /// Handler ran and returned `lines` lines.
    Executed { command: String, lines: usize },
    /// Handler returned an error.
    Failed { command: String },
}

/// Turns submitted lines into output.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    prompt: String,
    cancel_marker: String,
}

impl Dispatcher {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            cancel_marker: config.cancel_marker.clone(),
        }
    }

    /// The echo written for a submitted line.
    pub fn echo_line(&self, trimmed: &str) -> String {
        format!("{} {trimmed}", self.prompt)
    }

    /// Dispatch one raw line against `env.registry`, writing to `env.log`.
    ///
    /// Every non-blank line is echoed as a `Command` line before anything
    /// else is written. Errors are rendered, never returned.
    pub fn execute(&self, raw: &str, env: &mut Environment<'_>) -> DispatchOutcome {
        let line = raw.trim();
        if line.is_empty() {
            return DispatchOutcome::Ignored;
        }

        env.log.append(self.echo_line(line), LineKind::Command);

        if line.contains(self.cancel_marker.as_str()) {
            log::debug!("interrupted: {line}");
            return DispatchOutcome::Interrupted;
        }

        if line == DESTRUCTIVE_LINE {
            env.log.append(REFUSAL, LineKind::Error);
            return DispatchOutcome::Refused;
        }

        let tokens = tokenize(line);
        let name = tokens[0].to_lowercase();
        let args = &tokens[1..];

        let registry = env.registry;
        let Some(cmd) = registry.resolve(&name) else {
            log::debug!("command not found: {name}");
            env.log
                .append(format!("command not found: '{name}'"), LineKind::Error);
            env.log
                .append("type 'help' to see available commands.", LineKind::System);
            return DispatchOutcome::NotFound(name);
        };

        log::debug!("dispatch: {name} ({} args)", args.len());
        match cmd.execute(args, env) {
            Ok(lines) => {
                let count = lines.len();
                for l in lines {
                    env.log.append(l, LineKind::Output);
                }
                DispatchOutcome::Executed {
                    command: name,
                    lines: count,
                }
            },
            Err(e) => {
                log::warn!("{name} failed: {e}");
                env.log.append(format!("error: {e}"), LineKind::Error);
                DispatchOutcome::Failed { command: name }
            },
        }
    }
}
