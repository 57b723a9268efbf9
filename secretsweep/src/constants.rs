//! Shared limits, keyword sets, and compiled fallback regexes.

mod limits;
mod regexes;
mod sets;

pub use limits::{
    CONFIG_FILENAME, DEFAULT_MASK, DEFAULT_MOUNT_PREFIX, DEFAULT_RULE_LABEL, HIDDEN_SECRET,
    MAX_SECRET_DISPLAY_LEN, SYNTHETIC_FILE_LABEL, TRUNCATION_MARKER,
};
pub use regexes::get_fallback_report_patterns;
pub use sets::{get_high_risk_keywords, get_marker_keywords, get_medium_risk_keywords};
