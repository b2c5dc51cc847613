pub mod diff;
pub mod language;
pub mod names;
pub mod preprocess;
