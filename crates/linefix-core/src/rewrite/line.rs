// crates/linefix-core/src/rewrite/line.rs

use crate::rules::ruleset::RuleSet;

/// What the rule set did to one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// No rule matched; the line is passed through byte for byte.
    Untouched,
    /// Replaced wholesale by `full_line[rule]`.
    FullLine { rule: usize },
    /// Substring rules replaced `hits` occurrences in total.
    Substituted { hits: usize },
}

/// Applies `rules` to a single line (terminator included).
///
/// The first full-line rule whose marker occurs in the line wins and no other
/// rule runs. Otherwise each substring rule runs in order over the output of
/// the previous one.
pub fn fix_line(line: &str, rules: &RuleSet) -> (String, LineOutcome) {
    if let Some((i, rule)) = rules
        .full_line
        .iter()
        .enumerate()
        .find(|(_, r)| r.matches(line))
    {
        return (rule.line.clone(), LineOutcome::FullLine { rule: i });
    }

    let mut cur = line.to_string();
    let mut hits = 0usize;
    for rule in &rules.substring {
        let (next, n) = rule.apply(&cur);
        cur = next;
        hits += n;
    }

    if hits == 0 {
        (cur, LineOutcome::Untouched)
    } else {
        (cur, LineOutcome::Substituted { hits })
    }
}
