use crate::error::{LineFixError, Result};
use crate::rules::ruleset::RuleSet;

/// Rejects rule sets that could change the number of lines in a document.
pub fn validate_rules(r: &RuleSet) -> Result<()> {
    for (i, rule) in r.full_line.iter().enumerate() {
        if rule.marker.is_empty() {
            return Err(LineFixError::Validation(format!(
                "full_line[{i}]: marker must be non-empty"
            )));
        }
        // Exactly one terminator, at the end.
        if !rule.line.ends_with('\n') || rule.line.matches('\n').count() != 1 {
            return Err(LineFixError::Validation(format!(
                "full_line[{i}]: line must end with a single '\\n' and contain no other"
            )));
        }
    }

    for (i, rule) in r.substring.iter().enumerate() {
        if rule.target.is_empty() {
            return Err(LineFixError::Validation(format!(
                "substring[{i}]: target must be non-empty"
            )));
        }
        if rule.target.contains('\n') || rule.replacement.contains('\n') {
            return Err(LineFixError::Validation(format!(
                "substring[{i}]: target and replacement must not contain '\\n'"
            )));
        }
    }

    Ok(())
}

/// Non-fatal findings about a valid rule set.
pub fn diagnostics(r: &RuleSet) -> Vec<String> {
    let mut warns = Vec::new();

    for (i, rule) in r.substring.iter().enumerate() {
        if rule.target == rule.replacement {
            warns.push(format!(
                "substring[{i}] replaces {:?} with itself (no-op)",
                rule.target
            ));
            continue;
        }
        for (j, other) in r.substring.iter().enumerate() {
            if rule.replacement.contains(other.target.as_str()) {
                warns.push(format!(
                    "substring[{i}] replacement {:?} contains substring[{j}] target {:?}; a second pass would rewrite it again",
                    rule.replacement, other.target
                ));
            }
        }
    }

    warns
}
