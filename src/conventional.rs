use regex::Regex;

use crate::config::ConventionalCommitsConfig;
pub use crate::version::VersionBump;

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub has_breaking_marker: bool,
}

/// Changelog group a commit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitGroup {
    Breaking,
    Feature,
    Fix,
    Other,
}

/// Parses a commit subject according to the conventional commits format.
///
/// Supports:
/// - type(scope)!: description
/// - type(scope): description
/// - type!: description
/// - type: description
///
/// The type is matched case-insensitively and normalized to lowercase. The
/// scope may be empty, and the description must be non-empty.
///
/// # Returns
/// * `Some(ParsedCommit)` - Message matches the conventional format
/// * `None` - Non-conventional message
pub fn parse_conventional_commit(message: &str) -> Option<ParsedCommit> {
    let re = Regex::new(r"^(?i)([a-z]+)(?:\(([^)]*)\))?(!?)\s*:\s*(.+)$").ok()?;
    let captures = re.captures(message)?;

    let r#type = captures.get(1)?.as_str().to_lowercase();
    let scope = captures
        .get(2)
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());
    let has_breaking_marker = captures.get(3).map(|m| m.as_str()) == Some("!");
    let description = captures.get(4)?.as_str().trim().to_string();

    Some(ParsedCommit {
        r#type,
        scope,
        description,
        has_breaking_marker,
    })
}

/// Checks whether a message contains any configured breaking-change indicator.
///
/// The comparison is case-insensitive, so `BREAKING CHANGE` matches both the
/// header and footer spellings.
pub fn contains_breaking_indicator(message: &str, config: &ConventionalCommitsConfig) -> bool {
    let upper = message.to_uppercase();
    config
        .breaking_change_indicators
        .iter()
        .any(|indicator| upper.contains(&indicator.to_uppercase()))
}

/// Classifies a commit message into its changelog group.
///
/// Breaking takes precedence over the type-based groups. Non-conventional
/// messages always fall into `Other`; a breaking indicator in one affects
/// bump detection but not the grouping.
pub fn classify_commit(message: &str, config: &ConventionalCommitsConfig) -> CommitGroup {
    let parsed = match parse_conventional_commit(message) {
        Some(parsed) => parsed,
        None => return CommitGroup::Other,
    };

    if parsed.has_breaking_marker || contains_breaking_indicator(message, config) {
        return CommitGroup::Breaking;
    }

    if config.minor_types.contains(&parsed.r#type) {
        CommitGroup::Feature
    } else if config.patch_types.contains(&parsed.r#type) {
        CommitGroup::Fix
    } else {
        CommitGroup::Other
    }
}

/// Determines the version bump for a set of commit messages.
///
/// Precedence: any breaking commit forces a major bump; otherwise any commit
/// whose type is in `minor_types` forces minor; otherwise any `patch_types`
/// commit forces patch; otherwise the default is patch.
pub fn detect_bump_type(
    commit_messages: &[String],
    config: &ConventionalCommitsConfig,
) -> VersionBump {
    let mut has_features = false;
    let mut has_fixes = false;

    for message in commit_messages {
        match parse_conventional_commit(message) {
            Some(parsed) => {
                if parsed.has_breaking_marker || contains_breaking_indicator(message, config) {
                    return VersionBump::Major;
                } else if config.minor_types.contains(&parsed.r#type) {
                    has_features = true;
                } else if config.patch_types.contains(&parsed.r#type) {
                    has_fixes = true;
                }
            }
            // Non-conventional messages only matter when they carry a
            // breaking indicator
            None => {
                if contains_breaking_indicator(message, config) {
                    return VersionBump::Major;
                }
            }
        }
    }

    if has_features {
        VersionBump::Minor
    } else if has_fixes {
        VersionBump::Patch
    } else {
        // No conventional commits detected, default to patch
        VersionBump::Patch
    }
}
