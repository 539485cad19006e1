pub mod checksum;
pub mod format;
pub mod presets;
pub mod ruleset;
