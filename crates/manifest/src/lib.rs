//! # manifest
//!
//! Parser for the line-oriented dependency manifest that describes a TrendBot deployment
//! (`requirements_standalone.txt`).
//!
//! Format: `#` starts a comment line, blank lines are ignored, and every other line is either
//! `<name>==<version>` or a bare `<name>`. A declaration may carry a trailing ` # note`.

mod error;

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

pub use error::ManifestError;

const BUNDLED: &str = include_str!("../requirements_standalone.txt");

/// One installable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: String,
    /// Exact pin (`==`), if any.
    pub version: Option<String>,
    /// Trailing inline comment, without the `#`.
    pub note: Option<String>,
}

impl Requirement {
    pub fn is_pinned(&self) -> bool {
        self.version.is_some()
    }

    /// `(major, minor, patch)` when the pin is a plain numeric release.
    ///
    /// A two-part release such as `22.2` reads as `22.2.0`.
    pub fn semver_triplet(&self) -> Option<(u64, u64, u64)> {
        let mut parts = self.version.as_deref()?.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let patch = match parts.next() {
            Some(p) => parse_component(p)?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some((major, minor, patch))
    }

    /// Name normalized for comparison: lower-case, runs of `-`, `_`, `.` folded to `-`.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}=={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed manifest: requirements in file order plus the text of every comment line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    requirements: Vec<Requirement>,
    comments: Vec<String>,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let mut requirements = Vec::new();
        let mut comments = Vec::new();
        let mut seen = HashSet::new();
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix('#') {
                comments.push(comment.trim().to_string());
                continue;
            }

            let (decl, note) = match trimmed.split_once('#') {
                Some((decl, note)) => (decl.trim(), Some(note.trim().to_string())),
                None => (trimmed, None),
            };
            let requirement = parse_declaration(decl, note, line)?;

            if !seen.insert(requirement.normalized_name()) {
                return Err(ManifestError::Duplicate {
                    line,
                    name: requirement.name,
                });
            }
            requirements.push(requirement);
        }

        Ok(Self {
            requirements,
            comments,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The manifest shipped with this crate.
    pub fn bundled() -> Result<Self, ManifestError> {
        Self::parse(BUNDLED)
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Looks up a requirement by name (normalized comparison).
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        let wanted = normalize_name(name);
        self.requirements
            .iter()
            .find(|r| r.normalized_name() == wanted)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn pinned(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|r| r.is_pinned())
    }

    pub fn unpinned(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|r| !r.is_pinned())
    }

    /// Whether `term` appears as a whole word (case-insensitive) in any comment line.
    pub fn mentions_in_comments(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.comments.iter().any(|c| {
            c.to_lowercase()
                .split(|ch: char| !(ch.is_alphanumeric() || ch == '_' || ch == '-'))
                .any(|word| word == term)
        })
    }

    /// Comments stripped, entries sorted by normalized name, one per line.
    pub fn to_canonical_string(&self) -> String {
        let mut sorted: Vec<&Requirement> = self.requirements.iter().collect();
        sorted.sort_by_key(|r| r.normalized_name());
        let mut out = String::new();
        for r in sorted {
            out.push_str(&r.to_string());
            out.push('\n');
        }
        out
    }

    /// The `(name, version-or-none)` pairs, independent of order, comments and notes.
    pub fn entry_set(&self) -> BTreeSet<(String, Option<String>)> {
        self.requirements
            .iter()
            .map(|r| (r.name.clone(), r.version.clone()))
            .collect()
    }
}

fn parse_declaration(
    decl: &str,
    note: Option<String>,
    line: usize,
) -> Result<Requirement, ManifestError> {
    let (name, version) = match decl.split_once("==") {
        Some((name, version)) => {
            let version = version.trim();
            if version.is_empty() {
                return Err(ManifestError::EmptyVersion { line });
            }
            if !version
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '*' | '+' | '!' | '-' | '_'))
            {
                return Err(ManifestError::InvalidVersion {
                    line,
                    version: version.to_string(),
                });
            }
            (name.trim(), Some(version.to_string()))
        }
        None => {
            if decl.contains(['<', '>', '=', '~', '!']) {
                return Err(ManifestError::UnsupportedSpecifier {
                    line,
                    text: decl.to_string(),
                });
            }
            (decl, None)
        }
    };

    if !is_valid_name(name) {
        return Err(ManifestError::InvalidName {
            line,
            name: name.to_string(),
        });
    }

    Ok(Requirement {
        name: name.to_string(),
        version,
        note: note.filter(|n| !n.is_empty()),
    })
}

/// Letters, digits, `-`, `_`, `.`; must start and end with a letter or digit.
fn is_valid_name(name: &str) -> bool {
    let (Some(first), Some(last)) = (name.chars().next(), name.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_sep {
                out.push('-');
            }
            in_sep = true;
        } else {
            out.push(c.to_ascii_lowercase());
            in_sep = false;
        }
    }
    out
}

fn parse_component(s: &str) -> Option<u64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
