// crates/linefix-core/src/rules/presets.rs
//
// Built-in rule sets for the kitmed batch 4 product export.
// Both are valid configurations of the same rewriter; `precise` adds the
// hand-written replacement for the moria 9510 row, `quotes` only unwraps
// the quoted words.

use crate::rules::ruleset::{FullLineRule, RuleSet, SubstringRule};

/// Marker of the row whose description fields carry unbalanced nested quotes.
pub const MORIA_9510_MARKER: &str = "9510,moria,surgery-instruments";

pub const MORIA_9510_LINE: &str = "9510,moria,surgery-instruments,\
\"Castroviejo utility Pince(6.5-mm Platforms, 0.3-mm Oblique Teeth)\",\
\"Castroviejo utility Forceps(6.5-mm Platforms, 0.3-mm Oblique Teeth)\",\
\"Castroviejo Utility pince avec 0.3-mm oblique\",\
\"Castroviejo Utility forceps with 0.3-mm oblique\",,,,\
https://www.moria-surgical.com/media/cache/product_viewer/files/product/b52e3cf62d133816107a33dc932233a4fd4050e1.jpg,\
active,false\n";

/// Row the moria fix lands on in the batch 4 export.
pub const MORIA_9510_CHECK_LINE: usize = 11;

fn quoted_word_rules() -> Vec<SubstringRule> {
    vec![
        SubstringRule::new("\"utility\"", "utility"),
        SubstringRule::new("\"Utility\"", "Utility"),
        SubstringRule::new("\"colibri\"", "colibri"),
    ]
}

/// Unwraps the quoted words that break CSV parsing. No full-line rules.
pub fn quotes() -> RuleSet {
    RuleSet {
        check_line: None,
        full_line: Vec::new(),
        substring: quoted_word_rules(),
    }
}

/// `quotes` plus the literal replacement of the moria 9510 row, checked on line 11.
pub fn precise() -> RuleSet {
    RuleSet {
        check_line: Some(MORIA_9510_CHECK_LINE),
        full_line: vec![FullLineRule::new(MORIA_9510_MARKER, MORIA_9510_LINE)],
        substring: quoted_word_rules(),
    }
}
