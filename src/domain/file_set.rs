//! File Set model: the named collection of generated artifacts for one request.

/// Identifier for one generated artifact within a File Set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKey {
    Provider,
    Variables,
    Main,
    Backend,
    Outputs,
    Modules,
    RegoPolicies,
    Instructions,
}

impl FileKey {
    /// Stable key string used in prompts, display headers, and lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKey::Provider => "provider",
            FileKey::Variables => "variables",
            FileKey::Main => "main",
            FileKey::Backend => "backend",
            FileKey::Outputs => "outputs",
            FileKey::Modules => "modules",
            FileKey::RegoPolicies => "rego_policies",
            FileKey::Instructions => "instructions",
        }
    }

    /// File name used when the artifact is exported to disk.
    pub fn file_name(&self) -> String {
        match self {
            FileKey::Instructions => format!("{}.md", self.as_str()),
            _ => format!("{}.tf", self.as_str()),
        }
    }

}

/// Result of generating one file: text on success, an explicit marker on failure.
///
/// Failed entries are never dropped from the set, so the display layer can
/// report partial failure per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Generated(String),
    Failed(String),
}

impl FileOutcome {
    pub fn content(&self) -> Option<&str> {
        match self {
            FileOutcome::Generated(text) => Some(text.as_str()),
            FileOutcome::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }
}

/// Ordered collection of generated artifacts, keyed by `FileKey`.
///
/// Entries preserve the order of the prompt plan that produced them.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    entries: Vec<(FileKey, FileOutcome)>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a key, replacing any earlier entry for it.
    pub fn insert(&mut self, key: FileKey, outcome: FileOutcome) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = outcome;
        } else {
            self.entries.push((key, outcome));
        }
    }

    pub fn get(&self, key: FileKey) -> Option<&FileOutcome> {
        self.entries.iter().find(|(existing, _)| *existing == key).map(|(_, outcome)| outcome)
    }

    /// Entries in plan order.
    pub fn iter(&self) -> impl Iterator<Item = (FileKey, &FileOutcome)> {
        self.entries.iter().map(|(key, outcome)| (*key, outcome))
    }

    pub fn keys(&self) -> Vec<FileKey> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries carrying a failure marker.
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|(_, outcome)| outcome.is_failed()).count()
    }

    /// True when every entry failed; a fully failed set points at a systemic
    /// problem (for example a revoked credential) rather than a flaky call.
    pub fn all_failed(&self) -> bool {
        !self.entries.is_empty() && self.failed_count() == self.entries.len()
    }
}
