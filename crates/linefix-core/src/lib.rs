pub mod error;
pub mod validate;

pub mod rewrite;
pub mod rules;
pub mod text;

pub use crate::error::{LineFixError, Result};
pub use crate::rewrite::document::{
    apply_rules, rewrite, CheckedLine, RewriteReport, RewriteStats, Rewritten,
};
pub use crate::rewrite::line::{fix_line, LineOutcome};
pub use crate::rules::ruleset::{FullLineRule, RuleSet, SubstringRule};
