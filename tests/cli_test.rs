// tests/cli_test.rs
//
// End-to-end tests that run the compiled binary against scratch git
// repositories holding a manifest and changelog.
use git2::Repository;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\"\n}\n";
const CHANGELOG: &str = "# Changelog\n\n## [1.0.0] - 2026-01-01\n\n- initial release\n";

fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().expect("Could not get index");
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .expect("Could not add files to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = repo.signature().expect("Could not get sig");

    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("Could not peel HEAD")],
        Err(_) => vec![],
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Could not create commit")
}

/// Creates a repo with manifest/changelog tagged v1.0.0, then one extra
/// commit per message in `messages`.
fn setup_release_repo(messages: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }

    fs::write(temp_dir.path().join("manifest.json"), MANIFEST).unwrap();
    fs::write(temp_dir.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

    let release_commit = commit_all(&repo, "chore: release 1.0.0");
    repo.tag_lightweight(
        "v1.0.0",
        &repo.find_object(release_commit, None).unwrap(),
        false,
    )
    .expect("Could not create tag");

    for (i, message) in messages.iter().enumerate() {
        fs::write(
            temp_dir.path().join(format!("file{}.txt", i)),
            format!("change {}\n", i),
        )
        .unwrap();
        commit_all(&repo, message);
    }

    temp_dir
}

fn run_bump(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .args(args)
        .current_dir(dir)
        .env_remove("GITHUB_OUTPUT")
        .output()
        .expect("Failed to execute bump-version")
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_no_new_commits_is_a_noop() {
    let dir = setup_release_repo(&[]);
    let output = run_bump(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Nothing to bump"));

    assert_eq!(read(dir.path(), "manifest.json"), MANIFEST);
    assert_eq!(read(dir.path(), "CHANGELOG.md"), CHANGELOG);
}

#[test]
fn test_dry_run_does_not_mutate_files() {
    let dir = setup_release_repo(&["feat: add exports"]);
    let output = run_bump(dir.path(), &["--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[DRY RUN] No changes written."));
    assert!(stdout.contains("::set-output name=new_version::1.1.0"));
    assert!(stdout.contains("::set-output name=bump_type::minor"));

    assert_eq!(read(dir.path(), "manifest.json"), MANIFEST);
    assert_eq!(read(dir.path(), "CHANGELOG.md"), CHANGELOG);
}

#[test]
fn test_full_run_updates_manifest_and_changelog() {
    let dir = setup_release_repo(&["feat(api): add endpoint", "fix: resolve crash"]);
    let output = run_bump(dir.path(), &[]);

    assert!(output.status.success());

    let manifest = read(dir.path(), "manifest.json");
    assert!(manifest.contains("\"version\": \"1.1.0\""));
    assert!(manifest.contains("\"name\": \"app\""));

    let changelog = read(dir.path(), "CHANGELOG.md");
    assert!(changelog.starts_with("# Changelog\n\n## [1.1.0]"));
    assert!(changelog.contains("### Features"));
    assert!(changelog.contains("- **api:** add endpoint"));
    assert!(changelog.contains("### Bug Fixes"));
    assert!(changelog.contains("- resolve crash"));
    // The previous release section survives below the new one
    assert!(changelog.contains("## [1.0.0] - 2026-01-01"));
}

#[test]
fn test_breaking_commit_forces_major() {
    let dir = setup_release_repo(&["feat!: drop legacy api"]);
    let output = run_bump(dir.path(), &["--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("::set-output name=new_version::2.0.0"));
    assert!(stdout.contains("::set-output name=bump_type::major"));
}

#[test]
fn test_forced_bump_overrides_detection() {
    let dir = setup_release_repo(&["fix: small thing"]);
    let output = run_bump(dir.path(), &["--bump", "major", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("::set-output name=new_version::2.0.0"));
}

#[test]
fn test_unknown_bump_type_fails() {
    let dir = setup_release_repo(&["fix: small thing"]);
    let output = run_bump(dir.path(), &["--bump", "gigantic"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown bump type 'gigantic'"));
}

#[test]
fn test_malformed_manifest_version_fails() {
    let dir = setup_release_repo(&["fix: small thing"]);
    fs::write(
        dir.path().join("manifest.json"),
        "{\n  \"version\": \"1.2\"\n}\n",
    )
    .unwrap();

    let output = run_bump(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid version format"));
}

#[test]
fn test_github_output_receives_release_values() {
    let dir = setup_release_repo(&["feat: add exports"]);
    let output_file = dir.path().join("gh_output");

    let output = Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .current_dir(dir.path())
        .env("GITHUB_OUTPUT", &output_file)
        .output()
        .expect("Failed to execute bump-version");
    assert!(output.status.success());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("new_version=1.1.0\n"));
    assert!(content.contains("bump_type=minor\n"));
    assert!(content.contains("changelog<<EOF\n## [1.1.0]"));
    assert!(content.trim_end().ends_with("EOF"));
}

#[test]
fn test_custom_manifest_and_changelog_paths() {
    let dir = setup_release_repo(&["feat: add exports"]);
    fs::write(dir.path().join("pkg.json"), MANIFEST).unwrap();

    let output = run_bump(
        dir.path(),
        &["--manifest", "pkg.json", "--changelog", "HISTORY.md"],
    );
    assert!(output.status.success());

    let manifest = read(dir.path(), "pkg.json");
    assert!(manifest.contains("\"version\": \"1.1.0\""));
    // Default files untouched
    assert_eq!(read(dir.path(), "manifest.json"), MANIFEST);

    let history = read(dir.path(), "HISTORY.md");
    assert!(history.starts_with("# Changelog\n\n## [1.1.0]"));
}

#[test]
fn test_outside_git_repository_is_a_noop() {
    let dir = TempDir::new().expect("Could not create temp dir");
    fs::write(dir.path().join("manifest.json"), MANIFEST).unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

    let output = run_bump(dir.path(), &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Nothing to bump"));

    assert_eq!(read(dir.path(), "manifest.json"), MANIFEST);
    assert_eq!(read(dir.path(), "CHANGELOG.md"), CHANGELOG);
}
