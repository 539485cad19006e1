// crates/linefix-core/src/rewrite/document.rs

use std::path::{Path, PathBuf};

use crate::error::{LineFixError, Result};
use crate::rewrite::line::{fix_line, LineOutcome};
use crate::rules::checksum::digest_hex;
use crate::rules::ruleset::RuleSet;
use crate::text::lines::{join_lines, split_lines_keep_ends};
use crate::validate::validate_rules;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines: usize,
    pub lines_changed: usize,
    /// Lines replaced by a full-line rule.
    pub full_line_hits: usize,
    /// Substring occurrences replaced across all lines.
    pub substitutions: usize,
}

impl RewriteStats {
    fn observe(&mut self, outcome: LineOutcome, changed: bool) {
        self.lines += 1;
        if changed {
            self.lines_changed += 1;
        }
        match outcome {
            LineOutcome::Untouched => {}
            LineOutcome::FullLine { .. } => self.full_line_hits += 1,
            LineOutcome::Substituted { hits } => self.substitutions += hits,
        }
    }
}

/// A document after one pass of the rule set.
#[derive(Clone, Debug)]
pub struct Rewritten {
    pub lines: Vec<String>,
    pub stats: RewriteStats,
}

impl Rewritten {
    pub fn text(&self) -> String {
        join_lines(&self.lines)
    }

    /// 1-based line lookup.
    pub fn line(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }
}

/// Pure transform over an in-memory document. Line order and count are
/// preserved for every rule set accepted by `validate_rules`.
pub fn apply_rules(text: &str, rules: &RuleSet) -> Rewritten {
    let src = split_lines_keep_ends(text);
    let mut lines = Vec::with_capacity(src.len());
    let mut stats = RewriteStats::default();

    for line in src {
        let (fixed, outcome) = fix_line(line, rules);
        stats.observe(outcome, fixed != line);
        lines.push(fixed);
    }

    Rewritten { lines, stats }
}

/// Rewritten content of the line the caller asked to inspect.
/// `content` is `None` when the document has no such line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedLine {
    pub index: usize,
    pub content: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RewriteReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub stats: RewriteStats,
    pub checked: Option<CheckedLine>,
    pub in_bytes: usize,
    pub out_bytes: usize,
    pub in_digest: String,
    pub out_digest: String,
}

impl RewriteReport {
    pub fn unchanged(&self) -> bool {
        self.in_bytes == self.out_bytes && self.in_digest == self.out_digest
    }
}

/// Reads `source` whole, rewrites every line with `rules`, then writes the
/// result to `destination` in one go.
///
/// The destination is not touched unless the rule set validates and the
/// source was read and decoded as UTF-8. A failed write may leave a partial
/// destination behind.
pub fn rewrite(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    rules: &RuleSet,
    checked_line: Option<usize>,
) -> Result<RewriteReport> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    validate_rules(rules)?;

    let text = std::fs::read_to_string(source).map_err(|e| LineFixError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let out = apply_rules(&text, rules);
    let out_text = out.text();

    std::fs::write(destination, out_text.as_bytes()).map_err(|e| LineFixError::Write {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let checked = checked_line.map(|index| CheckedLine {
        index,
        content: out.line(index).map(|l| l.trim().to_string()),
    });

    Ok(RewriteReport {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        stats: out.stats,
        checked,
        in_bytes: text.len(),
        out_bytes: out_text.len(),
        in_digest: digest_hex(text.as_bytes()),
        out_digest: digest_hex(out_text.as_bytes()),
    })
}
