//! Reading the host payload from stdin or a file

use anyhow::{Context, Result};
use dashline_types::StdinInput;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Read one payload from `path`, or from stdin when no path is given
pub fn read_payload(path: Option<&Path>) -> Result<StdinInput> {
    let input = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
            StdinInput::from_reader(BufReader::new(file))?
        }
        None => StdinInput::from_reader(io::stdin().lock())?,
    };
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashline_types::InputError;

    fn write_input(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_blank_file_is_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, "\n");

        let err = read_payload(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Empty)
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, "{\"session_id\":");

        let err = read_payload(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_payload(Some(&dir.path().join("absent.json"))).is_err());
    }

    #[test]
    fn test_reads_session_id_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, r#"{"session_id": "abc"}"#);

        let input = read_payload(Some(&path)).unwrap();
        assert_eq!(input.session_id.as_deref(), Some("abc"));
    }
}
