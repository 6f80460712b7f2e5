//! Headless terminal shell engine for the resume explorer.
//!
//! The engine owns a fixed command registry, a bounded persisted command
//! history, and prefix autocomplete. It is browser-free: commands render
//! markup fragments as strings, and side effects (clearing the log, the
//! deferred skills-bar animation) are returned as data for the UI host to
//! apply.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod autocomplete;
mod commands;
mod history;
mod session;

use resume_model::Resume;

pub use autocomplete::{longest_common_prefix, Completion};
pub use history::{CommandHistory, NewerOutcome, HISTORY_LIMIT};
pub use session::{ShellSession, SubmitOutcome};

/// Deferred side effect requested by a command, applied by the UI host after
/// the returned markup has been inserted into the output log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    /// Empty the output log.
    ClearLog,
    /// Animate skill progress bars to their `data-level` widths after layout.
    AnimateSkillBars,
}

/// Rendered result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Markup fragment appended to the output log. May be empty.
    pub markup: String,
    /// Optional deferred effect for the UI host.
    pub effect: Option<ShellEffect>,
}

impl CommandOutput {
    /// Plain markup output with no effect.
    pub fn markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            effect: None,
        }
    }

    /// Markup output carrying a deferred effect.
    pub fn with_effect(markup: impl Into<String>, effect: ShellEffect) -> Self {
        Self {
            markup: markup.into(),
            effect: Some(effect),
        }
    }
}

/// A named, argument-taking operation in the shell's fixed vocabulary.
pub trait Command {
    /// Unique lower-case command name.
    fn name(&self) -> &'static str;

    /// One-line summary shown in help and sidebar listings.
    fn summary(&self) -> &'static str;

    /// Executes the command against the resume with whitespace-split arguments.
    fn execute(&self, resume: &Resume, args: &[String]) -> CommandOutput;
}

/// Immutable, insertion-ordered registry of the built-in commands.
///
/// Names are unique by construction; lookup is by lower-cased token.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Builds the registry with the full built-in command set.
    pub fn builtin() -> Self {
        Self {
            commands: commands::builtin(),
        }
    }

    /// Registered command names in insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.name()).collect()
    }

    /// Looks up a command by exact lower-case name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.name() == name)
            .map(Box::as_ref)
    }

    /// Parses and executes one raw line.
    ///
    /// The line is split on whitespace; the first token (lower-cased) selects
    /// the command and the rest become its arguments. Unknown tokens produce
    /// the fixed "command not found" message naming the original-case token.
    pub fn process(&self, resume: &Resume, line: &str) -> CommandOutput {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return CommandOutput::markup("");
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        match self.get(&token.to_lowercase()) {
            Some(command) => command.execute(resume, &args),
            None => CommandOutput::markup(format!(
                "Command not found: {token}. Type 'help' for available commands."
            )),
        }
    }

    /// Computes the autocomplete outcome for the current input text.
    pub fn complete(&self, input: &str) -> Completion {
        autocomplete::complete(&self.names(), input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use resume_model::sample_resume;

    use super::*;

    #[test]
    fn registry_names_are_unique_and_lowercase() {
        let registry = CommandRegistry::builtin();
        let names = registry.names();
        for name in &names {
            assert_eq!(*name, name.to_lowercase());
        }
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn unknown_command_names_token_and_points_to_help() {
        let registry = CommandRegistry::builtin();
        let resume = sample_resume();
        for token in ["frobnicate", "EXIT", "sudo"] {
            let output = registry.process(&resume, token);
            assert!(output.markup.contains(token), "missing token `{token}`");
            assert!(output.markup.contains("help"));
        }
    }

    #[test]
    fn lookup_is_case_insensitive_but_message_keeps_case() {
        let registry = CommandRegistry::builtin();
        let resume = sample_resume();
        let upper = registry.process(&resume, "ECHO hi");
        assert_eq!(upper.markup, "hi");

        let missing = registry.process(&resume, "Mystery");
        assert!(missing.markup.contains("Mystery"));
    }

    #[test]
    fn blank_line_renders_nothing() {
        let registry = CommandRegistry::builtin();
        let output = registry.process(&sample_resume(), "   ");
        assert_eq!(output.markup, "");
        assert_eq!(output.effect, None);
    }
}
