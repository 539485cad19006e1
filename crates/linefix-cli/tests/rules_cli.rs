use std::fs;
use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_linefix-cli"))
}

fn stdout_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn inspect_precise_lists_rules() {
    let stdout = stdout_ok(cli().args(["rules", "inspect", "--preset", "precise"]));
    assert!(stdout.contains("rules        = precise"), "{stdout}");
    assert!(stdout.contains("check_line   = Some(11)"), "{stdout}");
    assert!(stdout.contains("full_line    = 1"), "{stdout}");
    assert!(stdout.contains("substring    = 3"), "{stdout}");
    assert!(stdout.contains("ok: 4 rules"), "{stdout}");
}

#[test]
fn inspect_warns_on_self_feeding_rule() {
    let dir = tempfile::tempdir().unwrap();
    let rules = dir.path().join("rules.toml");
    fs::write(&rules, "[[substring]]\ntarget = \"a\"\nreplacement = \"aa\"\n").unwrap();

    let stdout = stdout_ok(cli().args(["rules", "inspect", "--rules", rules.to_str().unwrap()]));
    assert!(stdout.contains("WARN: substring[0]"), "{stdout}");
}

#[test]
fn exported_preset_drives_same_rewrite_as_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let rules = dir.path().join("precise.toml");
    let input = dir.path().join("in.csv");
    let out_builtin = dir.path().join("a.csv");
    let out_file = dir.path().join("b.csv");
    fs::write(
        &input,
        "h\nx,9510,moria,surgery-instruments,\"q\"\n\"Utility\" \"colibri\"\n",
    )
    .unwrap();

    stdout_ok(cli().args([
        "rules",
        "export",
        "--preset",
        "precise",
        "--out",
        rules.to_str().unwrap(),
    ]));

    stdout_ok(cli().args([
        "rewrite",
        "--in",
        input.to_str().unwrap(),
        "--out",
        out_builtin.to_str().unwrap(),
    ]));
    stdout_ok(cli().args([
        "rewrite",
        "--in",
        input.to_str().unwrap(),
        "--out",
        out_file.to_str().unwrap(),
        "--rules",
        rules.to_str().unwrap(),
    ]));

    assert_eq!(fs::read(&out_builtin).unwrap(), fs::read(&out_file).unwrap());
}
