//! Bounded, persisted command history with a navigation cursor.

/// Maximum retained history entries after any mutation.
pub const HISTORY_LIMIT: usize = 50;

/// Result of stepping the cursor toward newer entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewerOutcome {
    /// The input line should show this history entry.
    Entry(String),
    /// Navigation stepped past the newest entry; the input line returns to
    /// the user's own (blank) text.
    UserLine,
}

/// Ordered log of previously submitted raw command lines, most recent first.
///
/// Entries are not deduplicated; the log is capped at [`HISTORY_LIMIT`] after
/// every push. The cursor is `None` while the input line is user-authored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Restores a history from previously persisted entries, newest first.
    pub fn from_entries(mut entries: Vec<String>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self {
            entries,
            cursor: None,
        }
    }

    /// Current entries, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes a submitted line to the front and resets the cursor.
    pub fn push(&mut self, line: &str) {
        self.entries.insert(0, line.to_string());
        self.entries.truncate(HISTORY_LIMIT);
        self.cursor = None;
    }

    /// Steps the cursor one entry toward older history (ArrowUp).
    ///
    /// Clamps at the oldest entry; returns `None` when the history is empty.
    pub fn navigate_older(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(index) => (index + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        Some(self.entries[next].clone())
    }

    /// Steps the cursor one entry toward newer history (ArrowDown).
    ///
    /// From the newest entry the cursor leaves navigation and the user's own
    /// line is restored, symmetric with [`Self::navigate_older`]. Returns
    /// `None` when not navigating.
    pub fn navigate_newer(&mut self) -> Option<NewerOutcome> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some(NewerOutcome::UserLine)
            }
            index => {
                self.cursor = Some(index - 1);
                Some(NewerOutcome::Entry(self.entries[index - 1].clone()))
            }
        }
    }

    /// Current cursor offset, `None` while not navigating.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}
