// crates/linefix-cli/src/io/rules_file.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use linefix_core::rules::{format as rules_format, presets};
use linefix_core::RuleSet;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Preset {
    /// Moria 9510 row replacement + quoted-word unwrapping, checks line 11.
    Precise,
    /// Quoted-word unwrapping only.
    Quotes,
}

pub fn preset_rules(p: Preset) -> RuleSet {
    match p {
        Preset::Precise => presets::precise(),
        Preset::Quotes => presets::quotes(),
    }
}

pub fn preset_label(p: Preset) -> &'static str {
    match p {
        Preset::Precise => "precise",
        Preset::Quotes => "quotes",
    }
}

/// Load a .toml rule file.
pub fn load_rules(path: &str) -> Result<RuleSet> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read rules {path}"))?;
    let rules = rules_format::decode(&text).with_context(|| format!("decode rules {path}"))?;
    Ok(rules)
}

/// Save a RuleSet as a .toml rule file.
pub fn save_rules(path: &str, rules: &RuleSet) -> Result<()> {
    let text = rules_format::encode(rules).with_context(|| format!("encode rules {path}"))?;
    std::fs::write(path, text).with_context(|| format!("write rules {path}"))?;
    Ok(())
}

/// `--rules` wins over `--preset`. Returns the rules and a label for reports.
pub fn resolve(rules_path: Option<&str>, preset: Preset) -> Result<(RuleSet, String)> {
    match rules_path {
        Some(p) => Ok((load_rules(p)?, format!("file:{p}"))),
        None => Ok((preset_rules(preset), preset_label(preset).to_string())),
    }
}
