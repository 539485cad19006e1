pub mod document;
pub mod line;
