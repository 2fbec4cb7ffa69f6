//! Ordered history of visited locations.

use serde::Serialize;
use wf_core::LocationId;

/// One visit: where the player arrived and how they left again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// The visited location.
    pub location: LocationId,
    /// The location's long description at the time of the visit.
    pub description: String,
    /// The last command issued here, once there is one.
    pub next_command: Option<String>,
}

/// An append-only log of visits, in order.
///
/// Record `i + 1` is where record `i`'s outgoing command led. The newest
/// record has no outgoing command until the player acts again.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit as the new tail.
    pub fn append(&mut self, location: LocationId, description: impl Into<String>) {
        self.records.push(EventRecord {
            location,
            description: description.into(),
            next_command: None,
        });
    }

    /// Record the command just issued at the tail's location.
    ///
    /// A later call before the next [`append`](Self::append) replaces it.
    /// Does nothing on an empty log.
    pub fn set_outgoing_command(&mut self, command: impl Into<String>) {
        if let Some(last) = self.records.last_mut() {
            last.next_command = Some(command.into());
        }
    }

    /// The visited location IDs, in order.
    pub fn trace(&self) -> Vec<LocationId> {
        self.records.iter().map(|r| r.location).collect()
    }

    /// Walk the visits in order as `(location, description, outgoing command)`.
    ///
    /// Each call starts a fresh traversal.
    pub fn replay(&self) -> impl Iterator<Item = (LocationId, &str, Option<&str>)> + '_ {
        self.records.iter().map(|r| {
            (
                r.location,
                r.description.as_str(),
                r.next_command.as_deref(),
            )
        })
    }

    /// Get all records.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// The newest record.
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the replay as plain text, one description per visit followed
    /// by the choice that ended it.
    pub fn render_text(&self) -> String {
        let last = self.records.len().saturating_sub(1);
        let mut lines = Vec::new();
        for (i, (_, description, command)) in self.replay().enumerate() {
            lines.push(description.to_string());
            if let (true, Some(command)) = (i < last, command) {
                lines.push(format!("You choose: {command}"));
            }
        }
        lines.join("\n")
    }
}
