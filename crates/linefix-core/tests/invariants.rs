use linefix_core::rules::presets;
use linefix_core::{apply_rules, fix_line, FullLineRule, LineOutcome, RuleSet, SubstringRule};

const SAMPLE: &str = "id,brand,category,name\n\
1,keeler,\"utility\" lamp,x\n\
2,moria,\"colibri\" forceps,\"Utility\" set\n\
\n\
9510,moria,surgery-instruments,\"Castroviejo \"utility\" Pince\n\
3,nidek,plain,row";

#[test]
fn substring_rules_are_idempotent() {
    let r = presets::quotes();
    let once = apply_rules(SAMPLE, &r).text();
    let twice = apply_rules(&once, &r).text();
    assert_eq!(once, twice);
}

#[test]
fn line_count_is_preserved() {
    for r in [presets::quotes(), presets::precise()] {
        let out = apply_rules(SAMPLE, &r);
        assert_eq!(out.lines.len(), SAMPLE.split_inclusive('\n').count());
        assert_eq!(out.stats.lines, out.lines.len());
        assert_eq!(out.text().split_inclusive('\n').count(), out.lines.len());
    }
}

#[test]
fn non_matching_line_passes_through() {
    let r = presets::precise();
    let line = "3,nidek,plain,\"row\" with quotes\r\n";
    let (out, outcome) = fix_line(line, &r);
    assert_eq!(out, line);
    assert_eq!(outcome, LineOutcome::Untouched);
}

#[test]
fn full_line_rule_takes_precedence_over_substrings() {
    let r = RuleSet {
        check_line: None,
        full_line: vec![FullLineRule::new("MARK", "replaced\n")],
        substring: vec![SubstringRule::new("\"utility\"", "utility")],
    };
    let (out, outcome) = fix_line("a \"utility\" MARK b\n", &r);
    assert_eq!(out, "replaced\n");
    assert_eq!(outcome, LineOutcome::FullLine { rule: 0 });
}

#[test]
fn first_matching_full_line_rule_wins() {
    let r = RuleSet {
        check_line: None,
        full_line: vec![
            FullLineRule::new("B", "first\n"),
            FullLineRule::new("A", "second\n"),
        ],
        substring: Vec::new(),
    };
    let (out, outcome) = fix_line("A B\n", &r);
    assert_eq!(out, "first\n");
    assert_eq!(outcome, LineOutcome::FullLine { rule: 0 });
}

#[test]
fn substring_rules_chain_in_order() {
    let r = RuleSet {
        check_line: None,
        full_line: Vec::new(),
        substring: vec![SubstringRule::new("ab", "c"), SubstringRule::new("cc", "d")],
    };
    let (out, outcome) = fix_line("abab ab\n", &r);
    assert_eq!(out, "d c\n");
    assert_eq!(outcome, LineOutcome::Substituted { hits: 4 });
}

#[test]
fn crlf_terminators_survive_substitution() {
    let r = presets::quotes();
    let out = apply_rules("\"utility\"\r\nx\r\n", &r);
    assert_eq!(out.text(), "utility\r\nx\r\n");
}

#[test]
fn stats_count_lines_and_hits() {
    let out = apply_rules(SAMPLE, &presets::precise());
    assert_eq!(out.stats.full_line_hits, 1);
    // "utility" on line 2, "colibri" and "Utility" on line 3; line 5 is full-line.
    assert_eq!(out.stats.substitutions, 3);
    assert_eq!(out.stats.lines_changed, 3);
}

#[test]
fn empty_document_stays_empty() {
    let out = apply_rules("", &presets::precise());
    assert!(out.lines.is_empty());
    assert_eq!(out.text(), "");
}

#[test]
fn line_lookup_is_one_based() {
    let out = apply_rules("a\nb\n", &RuleSet::default());
    assert_eq!(out.line(1), Some("a\n"));
    assert_eq!(out.line(2), Some("b\n"));
    assert_eq!(out.line(0), None);
    assert_eq!(out.line(3), None);
}
