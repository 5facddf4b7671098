use serde::Serialize;

/// Tone of a log line, used by renderers for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Neutral narration.
    Info,
    /// Something went well.
    Good,
    /// A refused command or a mild threat.
    Warning,
    /// Serious danger or death.
    Danger,
    /// Blows exchanged.
    Combat,
}

/// One line of the player-facing narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Turn the line was written on.
    pub turn: u32,
    /// Message text.
    pub text: String,
    /// Tone.
    pub severity: Severity,
}

/// The player-facing message log.
///
/// Keeps the full history; [`recent`](Self::recent) serves the capped,
/// most-recent-first view renderers display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
    display_cap: usize,
}

impl MessageLog {
    /// Create an empty log that displays at most `display_cap` entries.
    pub fn new(display_cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            display_cap,
        }
    }

    /// Append a line.
    pub fn push(&mut self, turn: u32, text: impl Into<String>, severity: Severity) {
        self.entries.push(LogEntry {
            turn,
            text: text.into(),
            severity,
        });
    }

    /// Up to the display cap of entries, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(self.display_cap)
    }

    /// Full history, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The newest entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries ever written.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_newest_first_and_capped() {
        let mut log = MessageLog::new(3);
        for i in 0..5 {
            log.push(i, format!("line {i}"), Severity::Info);
        }
        let shown: Vec<_> = log.recent().map(|e| e.text.as_str()).collect();
        assert_eq!(shown, ["line 4", "line 3", "line 2"]);
        assert_eq!(log.len(), 5);
        assert_eq!(log.entries()[0].text, "line 0");
    }

    #[test]
    fn empty_log() {
        let log = MessageLog::new(50);
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert_eq!(log.recent().count(), 0);
    }
}
