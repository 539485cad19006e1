// crates/linefix-core/src/rules/format.rs

use crate::error::{LineFixError, Result};
use crate::rules::checksum::{blake3_16, hex16};
use crate::rules::ruleset::RuleSet;

/// Rule files are TOML:
///
/// ```toml
/// check_line = 11
///
/// [[full_line]]
/// marker = "9510,moria,surgery-instruments"
/// line = "9510,moria,...,active,false\n"
///
/// [[substring]]
/// target = '"utility"'
/// replacement = "utility"
/// ```
///
/// Table order inside each array is rule order.
pub fn decode(text: &str) -> Result<RuleSet> {
    toml::from_str(text).map_err(|e| LineFixError::RuleFormat(e.to_string()))
}

pub fn encode(rules: &RuleSet) -> Result<String> {
    toml::to_string_pretty(rules).map_err(|e| LineFixError::RuleFormat(e.to_string()))
}

/// Identity over rule content only; `check_line` is a reporting knob and
/// does not change what a run writes.
pub fn ruleset_id_16(rules: &RuleSet) -> [u8; 16] {
    let mut b = Vec::with_capacity(256);
    for r in &rules.full_line {
        b.push(b'F');
        push_str(&mut b, &r.marker);
        push_str(&mut b, &r.line);
    }
    for r in &rules.substring {
        b.push(b'S');
        push_str(&mut b, &r.target);
        push_str(&mut b, &r.replacement);
    }
    blake3_16(&b)
}

pub fn ruleset_id_hex(rules: &RuleSet) -> String {
    hex16(&ruleset_id_16(rules))
}

fn push_str(b: &mut Vec<u8>, s: &str) {
    b.extend_from_slice(&(s.len() as u64).to_le_bytes());
    b.extend_from_slice(s.as_bytes());
}
