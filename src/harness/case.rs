//! Test case discovery
//!
//! A case is a `testcase*` subdirectory of the test root holding a trace
//! file, a parameter file, and (for verification) a stored baseline.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// Directory-name prefix that marks a test case
pub const CASE_PREFIX: &str = "testcase";

/// Trace file fed to the simulator via `-t`
pub const INPUT_FILE: &str = "input.txt";

/// Parameter file translated into the argument list
pub const PARAMS_FILE: &str = "params.txt";

/// Stored expected-output baseline
pub const EXPECTED_FILE: &str = "output.txt";

/// One directory-backed test case
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Directory name, used as the case's display name
    pub name: String,
    /// Absolute or root-relative case directory
    pub dir: PathBuf,
}

impl TestCase {
    pub fn input_path(&self) -> PathBuf {
        self.dir.join(INPUT_FILE)
    }

    pub fn params_path(&self) -> PathBuf {
        self.dir.join(PARAMS_FILE)
    }

    pub fn expected_path(&self) -> PathBuf {
        self.dir.join(EXPECTED_FILE)
    }

    /// Required files that are absent, for the given mode.
    ///
    /// Verification needs the baseline on top of the trace and parameter
    /// files; generation writes the baseline itself.
    pub fn missing_files(&self, need_expected: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.input_path().is_file() {
            missing.push(INPUT_FILE);
        }
        if !self.params_path().is_file() {
            missing.push(PARAMS_FILE);
        }
        if need_expected && !self.expected_path().is_file() {
            missing.push(EXPECTED_FILE);
        }
        missing
    }

    /// True when every file the given mode requires is present
    pub fn is_complete(&self, need_expected: bool) -> bool {
        self.missing_files(need_expected).is_empty()
    }
}

/// Enumerate the `testcase*` subdirectories of `root`, sorted by name.
///
/// Only the directory name is checked here; fileset completeness is the
/// runner's concern so that incomplete cases can be skipped per mode.
pub fn discover(root: &Path) -> Result<Vec<TestCase>> {
    if !root.is_dir() {
        return Err(Error::TestRootMissing(root.display().to_string()));
    }

    let mut cases = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() && name.starts_with(CASE_PREFIX) {
            cases.push(TestCase {
                name,
                dir: entry.path(),
            });
        }
    }
    cases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_filters_and_sorts() {
        let root = tempfile::tempdir().unwrap();
        for dir in ["testcase02", "testcase01", "fixtures", "testcase10"] {
            fs::create_dir(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("testcase99"), "a file, not a dir").unwrap();

        let cases = discover(root.path()).unwrap();
        let names: Vec<&str> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["testcase01", "testcase02", "testcase10"]);
    }

    #[test]
    fn test_discover_missing_root() {
        assert!(matches!(
            discover(Path::new("/nonexistent/tests")),
            Err(Error::TestRootMissing(_))
        ));
    }

    #[test]
    fn test_missing_files_per_mode() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("testcase01");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(INPUT_FILE), "R 0x1000\n").unwrap();
        fs::write(dir.join(PARAMS_FILE), "S - 1024\n").unwrap();

        let case = TestCase {
            name: "testcase01".to_string(),
            dir,
        };
        assert!(case.is_complete(false));
        assert!(!case.is_complete(true));
        assert_eq!(case.missing_files(true), vec![EXPECTED_FILE]);
    }
}
