use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::Result;

/// Environment variable naming the CI output file (GitHub Actions convention)
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Appends release outputs to the CI output file, when one is configured.
///
/// Writes `new_version` and `bump_type` as plain key/value lines plus the
/// changelog section as a heredoc-delimited multi-line value. A missing or
/// empty `GITHUB_OUTPUT` variable makes this a no-op.
pub fn write_outputs(new_version: &str, bump_type: &str, changelog_section: &str) -> Result<()> {
    let path = match env::var(OUTPUT_FILE_ENV) {
        Ok(path) if !path.is_empty() => path,
        _ => return Ok(()),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "new_version={}", new_version)?;
    writeln!(file, "bump_type={}", bump_type)?;
    writeln!(file, "changelog<<EOF")?;
    writeln!(file, "{}", changelog_section)?;
    writeln!(file, "EOF")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_writes_outputs_when_env_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        env::set_var(OUTPUT_FILE_ENV, &path);

        write_outputs("1.3.0", "minor", "## [1.3.0] - 2026-08-30\n").unwrap();
        env::remove_var(OUTPUT_FILE_ENV);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("new_version=1.3.0\n"));
        assert!(content.contains("bump_type=minor\n"));
        assert!(content.contains("changelog<<EOF\n## [1.3.0] - 2026-08-30\n"));
        assert!(content.ends_with("EOF\n"));
    }

    #[test]
    #[serial]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        fs::write(&path, "earlier=1\n").unwrap();
        env::set_var(OUTPUT_FILE_ENV, &path);

        write_outputs("2.0.0", "major", "section").unwrap();
        env::remove_var(OUTPUT_FILE_ENV);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier=1\n"));
        assert!(content.contains("new_version=2.0.0"));
    }

    #[test]
    #[serial]
    fn test_noop_without_env() {
        env::remove_var(OUTPUT_FILE_ENV);
        write_outputs("1.0.0", "patch", "section").unwrap();
    }
}
