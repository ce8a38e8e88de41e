use anyhow::Result;
use clap::Parser;
use std::path::Path;

use git_autobump::classifier::ChangeClassifier;
use git_autobump::config;
use git_autobump::git::{ChangeSource, Git2ChangeSource};
use git_autobump::report::{self, RunOutcome};
use git_autobump::store::FileVersionStore;
use git_autobump::ui;
use git_autobump::workflow::{self, WorkflowOptions};

#[derive(clap::Parser)]
#[command(
    name = "git-autobump",
    about = "Analyze the latest commit and bump the project version"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path used to discover the git repository")]
    repo: String,

    #[arg(long, help = "Preview the bump a branch would produce, without writing")]
    preview: bool,

    #[arg(long, help = "Base revision for preview mode (defaults to the configured branch)")]
    base: Option<String>,

    #[arg(long, help = "Analyze and report without writing the version file")]
    dry_run: bool,

    #[arg(long, help = "Classify only: print the decision and exit")]
    explain: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-autobump {}", env!("CARGO_PKG_VERSION"));
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

    // Initialize git access
    let source = match Git2ChangeSource::open(&args.repo) {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let mut store = match FileVersionStore::from_config(&config.version_file) {
        Ok(store) => store,
        Err(e) => {
            ui::display_error(&format!("Version store error: {}", e));
            std::process::exit(1);
        }
    };

    if args.preview {
        let base = args
            .base
            .unwrap_or_else(|| config.behavior.base_branch.clone());

        let preview = workflow::run_preview(&config, &base, &source, &store);
        for warning in &preview.warnings {
            ui::display_boundary_warning(warning);
        }
        ui::display_preview(&preview);

        if let Err(e) =
            report::write_preview_summary(&preview.impact, &preview.base_version, Path::new("pr_summary.txt"))
        {
            ui::display_error(&format!("Failed to write preview summary: {}", e));
        }
        return Ok(());
    }

    if args.explain {
        let changes = match source.head_changes() {
            Ok(changes) => changes,
            Err(e) => {
                ui::display_error(&format!("Failed to read changes: {}", e));
                std::process::exit(1);
            }
        };

        ui::display_change_analysis(&changes);
        let decision = ChangeClassifier::new(&config).classify(&changes);
        ui::display_decision(&decision);
        return Ok(());
    }

    let options = WorkflowOptions {
        dry_run: args.dry_run,
        skip_override: workflow::skip_requested_from_env(),
    };

    match workflow::run_bump(&options, &config, &source, &mut store) {
        Ok(RunOutcome::Skipped(reason)) => {
            ui::display_skip(reason);
            report::write_github_outputs(&report::skip_outputs(reason.as_str()))?;
        }
        Ok(RunOutcome::Bumped(bump)) => {
            for warning in &bump.warnings {
                ui::display_boundary_warning(warning);
            }
            ui::display_version_change(&bump);
            ui::display_status(&format!("Bump: {} ({})", bump.kind, bump.reason));

            report::write_github_outputs(&report::bump_outputs(&bump))?;
            if let Err(e) = report::write_summary(&bump, Path::new("version_summary.txt")) {
                ui::display_error(&format!("Failed to write summary: {}", e));
            }

            if args.dry_run {
                ui::display_status("Dry run: version file left untouched");
            } else if bump.changed() {
                ui::display_success(&format!(
                    "Version bumped: {} -> {}",
                    bump.old_version, bump.new_version
                ));
            }
        }
        Err(e) => {
            // A failed version write is the one hard failure: report it and
            // exit nonzero so the pipeline notices the stored version did
            // not move.
            ui::display_error(&format!("Failed to update version: {}", e));
            report::write_github_outputs(&report::skip_outputs("update-failed")).ok();
            std::process::exit(1);
        }
    }

    Ok(())
}
