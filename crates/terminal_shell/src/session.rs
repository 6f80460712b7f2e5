//! Shell session: registry + resume + persisted history behind one façade.

use std::rc::Rc;

use platform_prefs::{load_json_with, save_json_with, PrefsStore, HISTORY_PREF_KEY};
use resume_model::Resume;

use crate::{
    autocomplete::Completion,
    history::{CommandHistory, NewerOutcome},
    CommandOutput, CommandRegistry,
};

/// Result of submitting one typed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The trimmed line, echoed into the output log as a prompt entry.
    pub line: String,
    /// Rendered command output.
    pub output: CommandOutput,
    /// Error from persisting the updated history, if any. Non-fatal.
    pub persist_error: Option<String>,
}

/// One shell instance per page: command registry, resume data, bounded
/// history, and the injected persistence port.
pub struct ShellSession {
    registry: CommandRegistry,
    resume: Resume,
    history: CommandHistory,
    prefs: Rc<dyn PrefsStore>,
}

impl ShellSession {
    /// Creates a session, loading persisted history (absent or invalid
    /// entries yield an empty history).
    pub fn new(resume: Resume, prefs: Rc<dyn PrefsStore>) -> Self {
        let entries: Vec<String> =
            load_json_with(prefs.as_ref(), HISTORY_PREF_KEY).unwrap_or_default();
        Self {
            registry: CommandRegistry::builtin(),
            resume,
            history: CommandHistory::from_entries(entries),
            prefs,
        }
    }

    /// The resume record commands read from.
    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Registered command names in insertion order.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Summary line for one registered command, for sidebar listings.
    pub fn command_summary(&self, name: &str) -> Option<&'static str> {
        self.registry.get(name).map(|command| command.summary())
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Submits a typed line: records it in history, persists the history,
    /// and dispatches to the command processor.
    ///
    /// Returns `None` when the trimmed line is empty (nothing happens).
    pub fn submit(&mut self, line: &str) -> Option<SubmitOutcome> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.history.push(trimmed);
        let persist_error =
            save_json_with(self.prefs.as_ref(), HISTORY_PREF_KEY, &self.history.entries()).err();
        let output = self.registry.process(&self.resume, trimmed);
        Some(SubmitOutcome {
            line: trimmed.to_string(),
            output,
            persist_error,
        })
    }

    /// Runs a line through the command processor without touching history.
    ///
    /// This is the sidebar-link path.
    pub fn run(&self, line: &str) -> CommandOutput {
        self.registry.process(&self.resume, line)
    }

    /// ArrowUp: steps toward older history, returning the new input text.
    pub fn navigate_older(&mut self) -> Option<String> {
        self.history.navigate_older()
    }

    /// ArrowDown: steps toward newer history.
    pub fn navigate_newer(&mut self) -> Option<NewerOutcome> {
        self.history.navigate_newer()
    }

    /// Computes the autocomplete outcome for the current input text.
    pub fn complete(&self, input: &str) -> Completion {
        self.registry.complete(input)
    }
}

#[cfg(test)]
mod tests {
    use platform_prefs::MemoryPrefsStore;
    use pretty_assertions::assert_eq;
    use resume_model::sample_resume;

    use super::*;

    fn session_with(store: MemoryPrefsStore) -> ShellSession {
        ShellSession::new(sample_resume(), Rc::new(store))
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut session = session_with(MemoryPrefsStore::default());
        assert_eq!(session.submit("   "), None);
        assert!(session.history().is_empty());
    }

    #[test]
    fn submission_trims_echoes_and_persists() {
        let store = MemoryPrefsStore::default();
        let mut session = session_with(store.clone());

        let outcome = session.submit("  echo hi  ").expect("non-empty line");
        assert_eq!(outcome.line, "echo hi");
        assert_eq!(outcome.output.markup, "hi");
        assert_eq!(outcome.persist_error, None);

        let persisted = store.load_raw(HISTORY_PREF_KEY).expect("persisted history");
        assert_eq!(persisted, "[\"echo hi\"]");
    }

    #[test]
    fn history_survives_session_reconstruction() {
        let store = MemoryPrefsStore::default();
        {
            let mut session = session_with(store.clone());
            session.submit("help");
            session.submit("whoami");
        }
        let restored = session_with(store);
        assert_eq!(restored.history(), ["whoami", "help"]);
    }

    #[test]
    fn corrupt_persisted_history_loads_as_empty() {
        let store = MemoryPrefsStore::default();
        store.save_raw(HISTORY_PREF_KEY, "{broken").expect("save");
        let session = session_with(store);
        assert!(session.history().is_empty());
    }

    #[test]
    fn arrow_up_k_times_yields_kth_most_recent() {
        let mut session = session_with(MemoryPrefsStore::default());
        for line in ["first", "second", "third"] {
            session.submit(line);
        }
        assert_eq!(session.navigate_older(), Some("third".to_string()));
        assert_eq!(session.navigate_older(), Some("second".to_string()));
        assert_eq!(session.navigate_older(), Some("first".to_string()));
        assert_eq!(session.navigate_older(), Some("first".to_string()));
    }

    #[test]
    fn sidebar_run_does_not_touch_history() {
        let store = MemoryPrefsStore::default();
        let session = session_with(store.clone());
        let output = session.run("whoami");
        assert!(output.markup.contains("Avery Quinn"));
        assert!(session.history().is_empty());
        assert_eq!(store.load_raw(HISTORY_PREF_KEY), None);
    }

    #[test]
    fn command_summaries_resolve_for_registered_names() {
        let session = session_with(MemoryPrefsStore::default());
        for name in session.command_names() {
            assert!(session.command_summary(name).is_some());
        }
        assert_eq!(session.command_summary("missing"), None);
    }
}
