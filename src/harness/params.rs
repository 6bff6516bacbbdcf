//! Parameter file translation
//!
//! Turns a line-oriented `params.txt` into the simulator's argument list.
//! Each well-formed line `<name> - <value>` becomes the two tokens
//! `-<name>` and `<value>`, in file order. Blank and malformed lines are
//! skipped so comments and trailing whitespace never abort a case.

use std::path::Path;

use crate::common::{Error, Result};

/// Field separator within a parameter line
const SEPARATOR: &str = " - ";

/// Translate a parameter file into an ordered argument list.
///
/// Fails if the file cannot be read or contains no valid entries. The
/// caller is responsible for appending the trace-file and verbose tokens.
pub fn translate(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::ParamsRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let mut args = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || !line.contains('-') {
            continue;
        }
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        if fields.len() != 2 {
            continue;
        }
        args.push(format!("-{}", fields[0].trim()));
        args.push(fields[1].trim().to_string());
    }

    if args.is_empty() {
        return Err(Error::ParamsEmpty(path.display().to_string()));
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_params(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_translate_preserves_order() {
        let file = write_params("S - 1024\nT - 4\n");
        let args = translate(file.path()).unwrap();
        assert_eq!(args, vec!["-S", "1024", "-T", "4"]);
    }

    #[test]
    fn test_blank_and_malformed_lines_skipped() {
        let file = write_params("S - 1024\n\nnot a parameter\nB-32\nA - 2 - 3\nL - 1\n");
        let args = translate(file.path()).unwrap();
        // "B-32" has no " - " separator, "A - 2 - 3" splits into three fields
        assert_eq!(args, vec!["-S", "1024", "-L", "1"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let file = write_params("  S  -  1024  \n");
        let args = translate(file.path()).unwrap();
        assert_eq!(args, vec!["-S", "1024"]);
    }

    #[test]
    fn test_two_tokens_per_entry() {
        let file = write_params("S - 1024\nB - 32\nA - 2\nT - 4\nL - 1\n");
        let args = translate(file.path()).unwrap();
        assert_eq!(args.len(), 10);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_params("");
        assert!(matches!(
            translate(file.path()),
            Err(Error::ParamsEmpty(_))
        ));
    }

    #[test]
    fn test_only_malformed_lines_is_an_error() {
        let file = write_params("# comment\njust text\n");
        assert!(matches!(
            translate(file.path()),
            Err(Error::ParamsEmpty(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            translate(Path::new("/nonexistent/params.txt")),
            Err(Error::ParamsRead { .. })
        ));
    }
}
