use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

mod changelog;
mod ci;
mod config;
mod conventional;
mod error;
mod git_ops;
mod manifest;
mod ui;
mod version;

use version::VersionBump;

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    about = "Bump the manifest version and changelog from conventional commits"
)]
struct Args {
    #[arg(
        long,
        help = "Force a specific bump type (major, minor or patch) instead of auto-detecting"
    )]
    bump: Option<String>,

    #[arg(long, help = "Path to the version manifest")]
    manifest: Option<String>,

    #[arg(long, help = "Path to the changelog document")]
    changelog: Option<String>,

    #[arg(long, help = "Print what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bump-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI paths win over configured defaults
    let manifest_path = args.manifest.unwrap_or_else(|| config.files.manifest.clone());
    let changelog_path = args
        .changelog
        .unwrap_or_else(|| config.files.changelog.clone());

    // Read and parse the current version from the manifest
    let current = match manifest::read_version(Path::new(&manifest_path)) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let current_version = match version::parse_version(&current) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::display_status(&format!("Current version: {}", current));

    // Query git for the last release tag and the commits since it. Git
    // failures of any kind are treated as an empty history, not as errors.
    let git_repo = git_ops::GitRepo::discover();
    let latest_tag = git_repo
        .as_ref()
        .and_then(|repo| repo.latest_release_tag(&config.tags.prefix));
    match latest_tag.as_deref() {
        Some(tag) => ui::display_status(&format!("Last tag: {}", tag)),
        None => ui::display_status("No previous tags found; analyzing all commits"),
    }

    let commits = git_repo
        .as_ref()
        .map(|repo| repo.commit_subjects_since(latest_tag.as_deref()))
        .unwrap_or_default();

    if commits.is_empty() {
        println!("No new commits since last tag. Nothing to bump.");
        return Ok(());
    }
    ui::display_commit_analysis(&commits);

    // Determine the version bump: forced by flag or detected from commits
    let bump_type = match args.bump.as_deref() {
        Some(forced) => match VersionBump::from_str(forced) {
            Ok(bump) => {
                ui::display_status(&format!("Forced bump type: {}", bump));
                bump
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
        None => {
            let detected = conventional::detect_bump_type(&commits, &config.conventional_commits);
            ui::display_status(&format!("Auto-detected bump type: {}", detected));
            detected
        }
    };

    let new_version = version::bump_version(current_version, &bump_type).to_string();
    ui::display_version_change(&current, &new_version);

    let section = changelog::render_section(
        &commits,
        &new_version,
        Local::now().date_naive(),
        &config.conventional_commits,
    );

    if args.dry_run {
        println!("[DRY RUN] No changes written.");
        println!("::set-output name=new_version::{}", new_version);
        println!("::set-output name=bump_type::{}", bump_type);
        return Ok(());
    }

    // Persist the new version into the manifest
    if let Err(e) = manifest::write_version(Path::new(&manifest_path), &new_version) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
    ui::display_success(&format!(
        "Updated {} to version {}",
        manifest_path, new_version
    ));

    // Insert the rendered section into the changelog
    if let Err(e) =
        changelog::update_changelog(Path::new(&changelog_path), &section, &config.changelog.heading)
    {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
    ui::display_success(&format!("Updated {}", changelog_path));

    // Emit CI outputs when GITHUB_OUTPUT is configured
    if let Err(e) = ci::write_outputs(&new_version, &bump_type.to_string(), &section) {
        ui::display_status(&format!("Warning: could not write CI outputs: {}", e));
    }

    Ok(())
}
