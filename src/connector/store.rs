//! Shared AWS credentials file access.
//!
//! The store is the standard shared-credentials file: named `[section]`
//! headers over `key = value` lines. Every save rewrites the whole file, so
//! two invocations mutating the store at the same time can clobber each
//! other's sections; the host platform is expected to serialize scans (one
//! per worker), and deployments that cannot rely on that need file locking
//! or a per-invocation credentials path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable the AWS tooling uses to relocate the store.
pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

const DEFAULT_SECTION: &str = "default";

/// One named profile section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }
}

/// Parsed contents of the credentials file, section order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDocument {
    sections: Vec<Section>,
}

impl ProfileDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the shared-credentials format. Comment lines (`#`, `;`) and
    /// keys outside any section are ignored; unparsable lines are skipped
    /// rather than rejected, matching how permissive the AWS tooling itself
    /// is about this file.
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::new();
        let mut current: Option<Section> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                if let Some(section) = current.take() {
                    doc.sections.push(section);
                }
                current = Some(Section::new(name.trim()));
                continue;
            }

            if let (Some(section), Some((key, value))) = (current.as_mut(), line.split_once('=')) {
                section.set(key.trim(), value.trim());
            }
        }

        if let Some(section) = current {
            doc.sections.push(section);
        }

        doc
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Set a key in the named section, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if !self.has_section(section) {
            self.sections.push(Section::new(section));
        }
        if let Some(s) = self.sections.iter_mut().find(|s| s.name == section) {
            s.set(key, value);
        }
    }

    pub fn add_section(&mut self, name: &str) {
        if !self.has_section(name) {
            self.sections.push(Section::new(name));
        }
    }

    /// Remove a section. Missing sections are tolerated.
    pub fn remove_section(&mut self, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.name != name);
        self.sections.len() != before
    }
}

/// Handle on the backing credentials file.
#[derive(Debug, Clone)]
pub struct CredentialsStore {
    path: PathBuf,
}

impl CredentialsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the store location: `AWS_SHARED_CREDENTIALS_FILE` if set,
    /// else `~/.aws/credentials`.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CREDENTIALS_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".aws").join("credentials")))
            .unwrap_or_else(|| PathBuf::from(".aws/credentials"));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> io::Result<ProfileDocument> {
        let text = fs::read_to_string(&self.path)?;
        Ok(ProfileDocument::parse(&text))
    }

    /// Load the store, initializing a fresh file (empty `[default]`
    /// section, parent directory created) when it does not exist yet.
    pub fn load_or_init(&self) -> io::Result<ProfileDocument> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "initializing credentials store");
            let mut doc = ProfileDocument::new();
            doc.add_section(DEFAULT_SECTION);
            self.save(&doc)?;
        }
        self.load()
    }

    /// Persist the document, rewriting the entire file.
    pub fn save(&self, doc: &ProfileDocument) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, doc.render())
    }
}
