use std::str::FromStr;

use crate::error::{BumpVersionError, Result};

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Represents the type of semantic version bump to apply.
///
/// Used to determine how to increment version numbers based on commit analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::fmt::Display for VersionBump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for VersionBump {
    type Err = BumpVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(BumpVersionError::version(format!(
                "Unknown bump type '{}'",
                other
            ))),
        }
    }
}

/// Parses a `MAJOR.MINOR.PATCH` version string.
///
/// Requires exactly three dot-separated components, each a non-negative integer.
///
/// # Arguments
/// * `version_str` - Version string to parse (e.g., "1.2.3")
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed version
/// * `Err` - If the string has the wrong number of components or a non-integer component
pub fn parse_version(version_str: &str) -> Result<Version> {
    let parts: Vec<&str> = version_str.split('.').collect();
    if parts.len() != 3 {
        return Err(BumpVersionError::version(format!(
            "Invalid version format '{}'. Expected MAJOR.MINOR.PATCH",
            version_str
        )));
    }

    let component = |s: &str| -> Result<u32> {
        s.parse::<u32>().map_err(|_| {
            BumpVersionError::version(format!(
                "Version components must be integers: '{}'",
                version_str
            ))
        })
    };

    Ok(Version::new(
        component(parts[0])?,
        component(parts[1])?,
        component(parts[2])?,
    ))
}

/// Parses a version from a release tag name.
///
/// The tag must carry the configured prefix (e.g., "v" for "v1.2.3"); the
/// remainder must be a full `MAJOR.MINOR.PATCH` version. An empty prefix
/// matches any tag.
///
/// # Returns
/// * `Some(Version)` - Successfully parsed version
/// * `None` - If the prefix is missing or the remainder is not a version
pub fn parse_version_from_tag(tag: &str, prefix: &str) -> Option<Version> {
    let remainder = tag.strip_prefix(prefix)?;
    parse_version(remainder).ok()
}

/// Bumps a version according to the specified bump type.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
pub fn bump_version(mut version: Version, bump_type: &VersionBump) -> Version {
    match bump_type {
        VersionBump::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
        }
        VersionBump::Minor => {
            version.minor += 1;
            version.patch = 0;
        }
        VersionBump::Patch => {
            version.patch += 1;
        }
    }
    version
}
