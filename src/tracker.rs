use std::collections::HashMap;
use std::sync::Mutex;

/// Handed out by [`RequestTracker::begin`]; identifies one load of one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    resource: String,
    generation: u64,
}

impl RequestTicket {
    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-resource generation counters used to drop stale responses.
///
/// Each `begin` supersedes every earlier ticket for the same resource. A
/// response is applied only while its ticket is still the latest.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generations: Mutex<HashMap<String, u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, resource: &str) -> RequestTicket {
        let mut generations = self.generations.lock().unwrap_or_else(|e| e.into_inner());
        let generation = generations.entry(resource.to_string()).or_insert(0);
        *generation += 1;
        RequestTicket {
            resource: resource.to_string(),
            generation: *generation,
        }
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        let generations = self.generations.lock().unwrap_or_else(|e| e.into_inner());
        generations.get(&ticket.resource) == Some(&ticket.generation)
    }

    /// True while a ticket newer than `ticket` exists
    pub fn is_superseded(&self, ticket: &RequestTicket) -> bool {
        !self.is_latest(ticket)
    }
}
