// crates/linefix-cli/src/cmd/rules.rs

use clap::{Args, Subcommand};
use linefix_core::rules::format as rules_format;
use linefix_core::validate::{diagnostics, validate_rules};
use linefix_core::RuleSet;

use crate::io::rules_file::{self, Preset};

#[derive(Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub cmd: RulesCmd,
}

#[derive(Subcommand)]
pub enum RulesCmd {
    /// Print every rule, the rule set id, and warn on non-idempotent rules
    Inspect(InspectArgs),

    /// Write a built-in preset as an editable .toml rule file
    Export(ExportArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    #[arg(long, value_enum, default_value_t = Preset::Precise)]
    pub preset: Preset,

    /// Rule file (.toml). Overrides --preset.
    #[arg(long)]
    pub rules: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(long, value_enum)]
    pub preset: Preset,

    /// Output rule file path (.toml)
    #[arg(long)]
    pub out: String,
}

pub fn run(args: RulesArgs) -> anyhow::Result<()> {
    match args.cmd {
        RulesCmd::Inspect(a) => cmd_inspect(a),
        RulesCmd::Export(a) => cmd_export(a),
    }
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let (r, label) = rules_file::resolve(a.rules.as_deref(), a.preset)?;

    println!("rules        = {}", label);
    println!("rules_id     = {}", rules_format::ruleset_id_hex(&r));
    println!("check_line   = {:?}", r.check_line);

    println!("full_line    = {}", r.full_line.len());
    for (i, rule) in r.full_line.iter().enumerate() {
        println!("full_line[{}] marker={:?}", i, rule.marker);
        println!("full_line[{}] line={:?}", i, rule.line);
    }

    println!("substring    = {}", r.substring.len());
    for (i, rule) in r.substring.iter().enumerate() {
        println!(
            "substring[{}] {:?} -> {:?}",
            i, rule.target, rule.replacement
        );
    }

    println!();
    println!("--- diagnostics ---");
    report_diagnostics(&r);

    Ok(())
}

fn report_diagnostics(r: &RuleSet) {
    let valid = match validate_rules(r) {
        Ok(()) => true,
        Err(e) => {
            println!("ERROR: {e}");
            false
        }
    };
    if r.is_empty() {
        println!("WARN: rule set is empty; rewrite copies input verbatim.");
    }
    let warns = diagnostics(r);
    for w in &warns {
        println!("WARN: {w}");
    }
    if valid && warns.is_empty() && !r.is_empty() {
        println!("ok: {} rules", r.rule_count());
    }
}

fn cmd_export(a: ExportArgs) -> anyhow::Result<()> {
    let r = rules_file::preset_rules(a.preset);
    rules_file::save_rules(&a.out, &r)?;

    eprintln!(
        "export ok: preset={} out={} rules_id={}",
        rules_file::preset_label(a.preset),
        a.out,
        rules_format::ruleset_id_hex(&r)
    );
    Ok(())
}
