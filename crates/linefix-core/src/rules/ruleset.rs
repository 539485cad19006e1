// crates/linefix-core/src/rules/ruleset.rs

use serde::{Deserialize, Serialize};

/// Replaces a whole line when `marker` occurs anywhere in it.
/// `line` is written verbatim and carries its own terminator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullLineRule {
    pub marker: String,
    pub line: String,
}

impl FullLineRule {
    pub fn new(marker: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            line: line.into(),
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.marker.as_str())
    }
}

/// Replaces every occurrence of `target` with `replacement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubstringRule {
    pub target: String,
    pub replacement: String,
}

impl SubstringRule {
    pub fn new(target: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            replacement: replacement.into(),
        }
    }

    /// Applies the rule to `line`, returning the new text and the number of
    /// occurrences replaced.
    pub fn apply(&self, line: &str) -> (String, usize) {
        let hits = line.matches(self.target.as_str()).count();
        if hits == 0 {
            return (line.to_string(), 0);
        }
        (line.replace(self.target.as_str(), &self.replacement), hits)
    }
}

/// Ordered rule table. Full-line rules are always tried before substring rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    /// 1-based line whose rewritten content is reported after a run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_line: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub full_line: Vec<FullLineRule>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substring: Vec<SubstringRule>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.full_line.is_empty() && self.substring.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.full_line.len() + self.substring.len()
    }
}
