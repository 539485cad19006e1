use clap::Args;
use linefix_core::rules::format as rules_format;

use crate::io::rules_file::{self, Preset};

#[derive(Args)]
pub struct RewriteArgs {
    /// Input text file (e.g., kitmed_batch_4_FINAL.csv)
    #[arg(long)]
    pub r#in: String,

    /// Output path (created or overwritten)
    #[arg(long)]
    pub out: String,

    /// Built-in rule set, used when --rules is NOT provided.
    ///
    /// - precise: moria 9510 row replacement + quoted words, checks line 11
    /// - quotes:  quoted words only
    #[arg(long, value_enum, default_value_t = Preset::Precise)]
    pub preset: Preset,

    /// Rule file (.toml). Overrides --preset.
    #[arg(long)]
    pub rules: Option<String>,

    /// 1-based line to print after rewriting. Overrides the rule set's check_line.
    #[arg(long)]
    pub check_line: Option<usize>,
}

pub fn run(args: RewriteArgs) -> anyhow::Result<()> {
    let (rules, label) = rules_file::resolve(args.rules.as_deref(), args.preset)?;

    // Precedence: --check-line, then the rule set's own check_line.
    let check_line = args.check_line.or(rules.check_line);

    println!("rewrite: in={} rules={}", args.r#in, label);

    let report = linefix_core::rewrite(&args.r#in, &args.out, &rules, check_line)?;

    if let Some(c) = &report.checked {
        match &c.content {
            Some(text) => println!("line {} = {}", c.index, text),
            None => println!(
                "line {} = <absent> (document has {} lines)",
                c.index, report.stats.lines
            ),
        }
    }

    println!(
        "rewrite ok: out={} lines={} changed={} full_line={} substitutions={} rules_id={} in_blake3={} out_blake3={} unchanged={}",
        report.destination.display(),
        report.stats.lines,
        report.stats.lines_changed,
        report.stats.full_line_hits,
        report.stats.substitutions,
        rules_format::ruleset_id_hex(&rules),
        report.in_digest,
        report.out_digest,
        report.unchanged()
    );

    Ok(())
}
