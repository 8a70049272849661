use git2::Repository;
use std::collections::HashMap;
use std::path::Path;

use crate::version;

/// Wrapper around git2 Repository for release-tag and commit-history queries.
///
/// Every query degrades to an empty result on repository errors; a run in a
/// broken or missing repository behaves like a run with no history.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discovers the git repository in the current directory or its parents.
    ///
    /// # Returns
    /// * `Some(GitRepo)` - Repository found
    /// * `None` - Not inside a git repository
    pub fn discover() -> Option<Self> {
        Self::discover_at(Path::new("."))
    }

    /// Discovers the git repository at or above the given path.
    pub fn discover_at(path: &Path) -> Option<Self> {
        Repository::discover(path).ok().map(|repo| GitRepo { repo })
    }

    /// Finds the most recent release tag reachable from HEAD.
    ///
    /// Walks the commit history from HEAD backwards and returns the first tag
    /// whose name parses as a prefixed semantic version. Handles both
    /// lightweight and annotated tags. Any lookup failure yields `None`.
    pub fn latest_release_tag(&self, prefix: &str) -> Option<String> {
        self.try_latest_release_tag(prefix).ok().flatten()
    }

    fn try_latest_release_tag(
        &self,
        prefix: &str,
    ) -> std::result::Result<Option<String>, git2::Error> {
        let head = self.repo.head()?.peel_to_commit()?.id();

        // Map commit OIDs to release-tag names (peeling annotated tags)
        let mut tag_oids = HashMap::new();
        for tag_name in self.repo.tag_names(None)?.iter().flatten() {
            if version::parse_version_from_tag(tag_name, prefix).is_none() {
                continue;
            }
            if let Ok(tag_ref) = self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                if let Ok(tag_obj) = tag_ref.peel(git2::ObjectType::Any) {
                    tag_oids.insert(tag_obj.id(), tag_name.to_string());
                }
            }
        }

        if tag_oids.is_empty() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(tag_name) = tag_oids.get(&oid) {
                return Ok(Some(tag_name.clone()));
            }
        }

        Ok(None)
    }

    /// Collects commit subject lines since a tag.
    ///
    /// Walks the history from HEAD backwards until the tag commit is reached;
    /// with no tag, every reachable commit is included. Subjects come back in
    /// log order (newest first). Any walk failure yields an empty list.
    pub fn commit_subjects_since(&self, tag_name: Option<&str>) -> Vec<String> {
        self.try_commit_subjects_since(tag_name).unwrap_or_default()
    }

    fn try_commit_subjects_since(
        &self,
        tag_name: Option<&str>,
    ) -> std::result::Result<Vec<String>, git2::Error> {
        let head = self.repo.head()?.peel_to_commit()?.id();

        let stop_oid = tag_name.and_then(|name| {
            self.repo
                .find_reference(&format!("refs/tags/{}", name))
                .ok()
                .and_then(|r| r.peel(git2::ObjectType::Any).ok())
                .map(|obj| obj.id())
        });

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        let mut subjects = Vec::new();
        for oid in revwalk {
            let oid = oid?;

            // Stop once we reach the tagged commit
            if Some(oid) == stop_oid {
                break;
            }

            if let Ok(commit) = self.repo.find_commit(oid) {
                if let Some(summary) = commit.summary() {
                    subjects.push(summary.to_string());
                }
            }
        }

        Ok(subjects)
    }
}
