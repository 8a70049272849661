use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::config::ConventionalCommitsConfig;
use crate::conventional::{self, CommitGroup};
use crate::error::{BumpVersionError, Result};

/// Renders a changelog section for a release.
///
/// Commits are grouped into breaking changes, features, fixes, and other
/// changes, preserving their original order within each group. Empty groups
/// are omitted. Conventional commits render as `**scope:** description` (the
/// bold scope only when present); non-conventional subjects render verbatim,
/// trimmed.
pub fn render_section(
    commit_messages: &[String],
    new_version: &str,
    date: NaiveDate,
    config: &ConventionalCommitsConfig,
) -> String {
    let mut breaking = Vec::new();
    let mut features = Vec::new();
    let mut fixes = Vec::new();
    let mut other = Vec::new();

    for message in commit_messages {
        let entry = render_entry(message);
        match conventional::classify_commit(message, config) {
            CommitGroup::Breaking => breaking.push(entry),
            CommitGroup::Feature => features.push(entry),
            CommitGroup::Fix => fixes.push(entry),
            CommitGroup::Other => other.push(entry),
        }
    }

    let mut lines = vec![
        format!("## [{}] - {}", new_version, date.format("%Y-%m-%d")),
        String::new(),
    ];

    let groups = [
        ("### BREAKING CHANGES", breaking),
        ("### Features", features),
        ("### Bug Fixes", fixes),
        ("### Other Changes", other),
    ];

    for (header, entries) in groups {
        if entries.is_empty() {
            continue;
        }
        lines.push(header.to_string());
        lines.push(String::new());
        for entry in entries {
            lines.push(format!("- {}", entry));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Renders a single changelog entry from a commit subject.
fn render_entry(message: &str) -> String {
    match conventional::parse_conventional_commit(message) {
        Some(parsed) => match parsed.scope {
            Some(scope) => format!("**{}:** {}", scope, parsed.description),
            None => parsed.description,
        },
        None => message.trim().to_string(),
    }
}

/// Inserts a rendered section into the changelog document.
///
/// If the file starts with the configured heading, the section lands right
/// after the heading line. Otherwise the section is prepended above the
/// existing content. A missing file is created as heading plus section.
pub fn update_changelog(path: &Path, section: &str, heading: &str) -> Result<()> {
    let updated = if path.exists() {
        let existing = fs::read_to_string(path).map_err(|e| {
            BumpVersionError::changelog(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        if existing.starts_with(heading) {
            match existing.find('\n') {
                Some(end) => format!(
                    "{}\n{}\n{}",
                    &existing[..end + 1],
                    section,
                    &existing[end + 1..]
                ),
                // Heading with no trailing newline
                None => format!("{}\n\n{}\n", existing, section),
            }
        } else {
            format!("{}\n{}", section, existing)
        }
    } else {
        format!("{}\n\n{}\n", heading, section)
    };

    fs::write(path, updated).map_err(|e| {
        BumpVersionError::changelog(format!("Cannot write '{}': {}", path.display(), e))
    })?;

    Ok(())
}
