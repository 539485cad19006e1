// crates/linefix-core/src/text/lines.rs
//
// Line splitting that keeps terminators attached.
// Only `\n` ends a line; a `\r` before it stays part of the line so CRLF
// input is written back as CRLF. The final line may lack a terminator.

pub fn split_lines_keep_ends(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

pub fn join_lines(lines: &[String]) -> String {
    let total = lines.iter().map(String::len).sum();
    let mut out = String::with_capacity(total);
    for l in lines {
        out.push_str(l);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_terminators_and_unterminated_tail() {
        let v = split_lines_keep_ends("a\nb\r\nc");
        assert_eq!(v, vec!["a\n", "b\r\n", "c"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines_keep_ends("").is_empty());
    }

    #[test]
    fn blank_lines_are_lines() {
        assert_eq!(split_lines_keep_ends("\n\n").len(), 2);
    }
}
