//! Report normalization: turn raw scanner output into uniform findings.

mod extract;
mod finding;
mod normalizer;
mod severity;
#[cfg(test)]
mod tests;

pub use finding::{Finding, Severity};
pub use normalizer::{normalize, NormalizeOptions, ParseOutcome, RawMatchRecord, SeverityKeywords};
pub use severity::classify_rule;
