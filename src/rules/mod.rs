//! Pattern-based extraction rules.
//!
//! The engine applies an enumerable list of tagged regex rules to a file's
//! full text and unions their captures into one deduplicated dependency set.
//! A separate first-match rule recovers the `package` declaration.
//!
//! Note on namespaces: the import rule keeps the entire dotted path
//! (`com.b.Bar`) while the instantiation/inheritance/interface rules record
//! bare simple names (`Bar`). A type referenced both ways therefore yields two
//! distinct graph nodes. The rules are deliberately context-free and do not
//! unify the two namespaces.
//!
//! One divergence from a pure split-and-trim of the `implements` list: an
//! entry that trims to the empty string (trailing comma in the capture) is
//! dropped rather than recorded, since an empty identifier cannot name a
//! graph node.

use std::collections::BTreeSet;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One scanned file's extracted record.
///
/// `dependencies` is a `BTreeSet` so deduplication and ascending
/// lexicographic serialization order come for free.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: String,
    pub package: String,
    pub dependencies: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `import a.b.C;` — the whole dotted path is the token.
    Import,
    /// `new Foo(...)` — bare capitalized identifier.
    Instantiation,
    /// `extends Foo` — bare capitalized identifier.
    Inheritance,
    /// `implements Foo, Bar` — each comma-separated entry, trimmed.
    ///
    /// The list capture is line-greedy: unrelated word/comma material on the
    /// same physical line can be absorbed. Known heuristic limitation, kept.
    Interface,
}

pub struct ExtractionRule {
    pub kind: RuleKind,
    pattern: Regex,
}

pub struct DependencyExtractor {
    package_pattern: Regex,
    rules: Vec<ExtractionRule>,
}

impl DependencyExtractor {
    pub fn new() -> Result<Self> {
        let rules = vec![
            ExtractionRule {
                kind: RuleKind::Import,
                pattern: Regex::new(r"(?m)^\s*import\s+([\w.]+);")?,
            },
            ExtractionRule {
                kind: RuleKind::Instantiation,
                pattern: Regex::new(r"new\s+([A-Z]\w*)")?,
            },
            ExtractionRule {
                kind: RuleKind::Inheritance,
                pattern: Regex::new(r"extends\s+([A-Z]\w*)")?,
            },
            ExtractionRule {
                kind: RuleKind::Interface,
                pattern: Regex::new(r"implements\s+([\w \t,]+)")?,
            },
        ];

        Ok(Self {
            package_pattern: Regex::new(r"^\s*package\s+([\w.]+);")?,
            rules,
        })
    }

    /// Apply every rule to `content` and union the captures. Never fails:
    /// a file with no matches yields an empty package and an empty set.
    pub fn extract(&self, relative_path: &str, content: &str) -> SourceUnit {
        let mut dependencies = BTreeSet::new();

        for rule in &self.rules {
            for captures in rule.pattern.captures_iter(content) {
                if let Some(capture) = captures.get(1) {
                    accumulate(rule.kind, capture.as_str(), &mut dependencies);
                }
            }
        }

        SourceUnit {
            path: relative_path.to_string(),
            package: self.find_package(content),
            dependencies,
        }
    }

    /// First matching line wins, scanning top to bottom. No declaration is a
    /// valid empty package, not an error.
    fn find_package(&self, content: &str) -> String {
        for line in content.lines() {
            if let Some(captures) = self.package_pattern.captures(line) {
                return captures[1].to_string();
            }
        }
        String::new()
    }
}

/// Uniform accumulation step: the rule kind selects how a capture is folded
/// into the dependency set, so new rule kinds compose without touching the
/// matching loop.
fn accumulate(kind: RuleKind, capture: &str, dependencies: &mut BTreeSet<String>) {
    match kind {
        RuleKind::Interface => {
            for entry in capture.split(',') {
                let entry = entry.trim();
                if !entry.is_empty() {
                    dependencies.insert(entry.to_string());
                }
            }
        }
        RuleKind::Import | RuleKind::Instantiation | RuleKind::Inheritance => {
            dependencies.insert(capture.to_string());
        }
    }
}
