//! Explicit state for one remediation session.
//!
//! The findings collection and the selected directory used to live as loose
//! mutable fields on a long-lived UI object; here they are owned by a single
//! struct and only change through the transition functions below. Scan and
//! cleanup phases are serialized: a new operation is rejected while one is
//! in flight, rather than racing two result sets.

use std::fmt;
use std::path::PathBuf;

use crate::report::Finding;

/// What the session is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No operation in flight.
    #[default]
    Idle,
    /// A scan was started and has not completed.
    Scanning,
    /// A cleanup command is being generated.
    Cleaning,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Scanning => "scanning",
            SessionPhase::Cleaning => "cleaning",
        };
        write!(f, "{label}")
    }
}

/// Errors emitted by session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An operation was requested while another is in flight.
    Busy(SessionPhase),
    /// A transition requires findings but the session holds none.
    NoFindings,
    /// A completion was reported for an operation that was never started.
    NotInPhase(SessionPhase),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Busy(phase) => {
                write!(f, "an operation is already in flight (phase: {phase})")
            }
            SessionError::NoFindings => {
                write!(f, "no findings in the current session; run a scan first")
            }
            SessionError::NotInPhase(phase) => {
                write!(f, "completion reported but session is not {phase}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// State owned by the presentation layer for the lifetime of one tool run.
#[derive(Debug, Default)]
pub struct ScanSession {
    phase: SessionPhase,
    selected_dir: Option<PathBuf>,
    findings: Vec<Finding>,
}

impl ScanSession {
    /// Creates an idle session with no findings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Findings from the most recent completed scan.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Directory the user pointed the scan at, when one was chosen.
    #[must_use]
    pub fn selected_dir(&self) -> Option<&PathBuf> {
        self.selected_dir.as_ref()
    }

    /// Records the directory the next scan applies to.
    pub fn select_dir(&mut self, dir: PathBuf) {
        self.selected_dir = Some(dir);
    }

    /// Marks a scan as started.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] unless the session is idle.
    pub fn begin_scan(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::Busy(self.phase));
        }
        self.phase = SessionPhase::Scanning;
        Ok(())
    }

    /// Completes the in-flight scan; the new findings replace the previous
    /// collection entirely (no incremental merge).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotInPhase`] when no scan is in flight.
    pub fn complete_scan(&mut self, findings: Vec<Finding>) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Scanning {
            return Err(SessionError::NotInPhase(SessionPhase::Scanning));
        }
        self.findings = findings;
        self.phase = SessionPhase::Idle;
        Ok(())
    }

    /// Abandons the in-flight scan, keeping the previous findings.
    pub fn abort_scan(&mut self) {
        if self.phase == SessionPhase::Scanning {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Marks cleanup-command generation as started.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] unless idle, or
    /// [`SessionError::NoFindings`] when there is nothing to remediate.
    pub fn begin_cleanup(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::Busy(self.phase));
        }
        if self.findings.is_empty() {
            return Err(SessionError::NoFindings);
        }
        self.phase = SessionPhase::Cleaning;
        Ok(())
    }

    /// Finishes cleanup-command generation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotInPhase`] when no cleanup is in flight.
    pub fn finish_cleanup(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Cleaning {
            return Err(SessionError::NotInPhase(SessionPhase::Cleaning));
        }
        self.phase = SessionPhase::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn one_finding() -> Vec<Finding> {
        vec![Finding {
            file: "a.py".to_owned(),
            line: 1,
            secret: "s".to_owned(),
            rule: "token".to_owned(),
            severity: Severity::High,
        }]
    }

    #[test]
    fn test_scan_lifecycle_replaces_findings() {
        let mut session = ScanSession::new();
        session.begin_scan().expect("idle session accepts scan");
        session.complete_scan(one_finding()).expect("in flight");
        assert_eq!(session.findings().len(), 1);

        session.begin_scan().expect("idle again");
        session.complete_scan(Vec::new()).expect("in flight");
        assert!(session.findings().is_empty(), "fresh scan replaces all");
    }

    #[test]
    fn test_concurrent_scan_rejected() {
        let mut session = ScanSession::new();
        session.begin_scan().expect("first scan");
        assert_eq!(
            session.begin_scan(),
            Err(SessionError::Busy(SessionPhase::Scanning))
        );
    }

    #[test]
    fn test_cleanup_requires_findings() {
        let mut session = ScanSession::new();
        assert_eq!(session.begin_cleanup(), Err(SessionError::NoFindings));

        session.begin_scan().expect("scan");
        session.complete_scan(one_finding()).expect("complete");
        session.begin_cleanup().expect("has findings");
        assert_eq!(
            session.begin_scan(),
            Err(SessionError::Busy(SessionPhase::Cleaning))
        );
        session.finish_cleanup().expect("finishes");
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_abort_keeps_previous_findings() {
        let mut session = ScanSession::new();
        session.begin_scan().expect("scan");
        session.complete_scan(one_finding()).expect("complete");

        session.begin_scan().expect("rescan");
        session.abort_scan();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.findings().len(), 1, "old results survive an abort");
    }

    #[test]
    fn test_stray_completion_rejected() {
        let mut session = ScanSession::new();
        assert_eq!(
            session.complete_scan(Vec::new()),
            Err(SessionError::NotInPhase(SessionPhase::Scanning))
        );
    }
}
