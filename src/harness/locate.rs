//! Simulator resolution
//!
//! Without an explicit path the harness tries a fixed candidate list in
//! the current directory, matching how the simulator's build drops its
//! binary next to the test tree.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// Resolve the simulator binary to invoke.
///
/// An explicit path wins; a bare name given explicitly is also looked up
/// on `PATH`. Otherwise the candidates are tried in order.
pub fn locate(explicit: Option<&Path>, candidates: &[String]) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        if path.components().count() == 1 {
            if let Ok(found) = which::which(path) {
                tracing::debug!(simulator = %found.display(), "resolved on PATH");
                return Ok(found);
            }
        }
        return Err(Error::SimulatorNotFound {
            searched: path.display().to_string(),
        });
    }

    for candidate in candidates {
        let path = Path::new(candidate);
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }
    Err(Error::simulator_not_found(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_must_exist() {
        let result = locate(Some(Path::new("/nonexistent/dir/sim")), &[]);
        assert!(matches!(result, Err(Error::SimulatorNotFound { .. })));
    }

    #[test]
    fn test_explicit_existing_path_wins() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let found = locate(Some(file.path()), &["./sim".to_string()]).unwrap();
        assert_eq!(found, file.path());
    }

    #[test]
    fn test_no_candidates_reports_all_searched() {
        let candidates = vec!["./no-such-sim.exe".to_string(), "./no-such-sim".to_string()];
        match locate(None, &candidates) {
            Err(Error::SimulatorNotFound { searched }) => {
                assert!(searched.contains("no-such-sim.exe"));
                assert!(searched.contains("./no-such-sim"));
            }
            other => panic!("expected SimulatorNotFound, got {other:?}"),
        }
    }
}
