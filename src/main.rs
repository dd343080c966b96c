use anyhow::Result;
use clap::Parser;

use autorelease::github::GitHubClient;
use autorelease::pipeline::{self, RunOptions, RunOutcome};
use autorelease::{actions, config, ui};

#[derive(clap::Parser)]
#[command(
    name = "autorelease",
    about = "Publish a semantic release from conventional commits since the last release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository as owner/name (overrides GITHUB_REPOSITORY)")]
    repo: Option<String>,

    #[arg(long, help = "Compute the decision and notes without publishing")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("autorelease {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let settings = match config::Settings::resolve(&file_config, args.repo.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_status(&format!(
        "Checking {}/{} for a new release...",
        settings.owner, settings.repo
    ));

    let host = GitHubClient::new(&settings);
    let options = RunOptions {
        target_commit: settings.target_commit.clone(),
        dry_run: args.dry_run,
    };

    match pipeline::run(&host, &options) {
        Ok(RunOutcome::Released(version)) => {
            ui::display_success(&format!("Release {} created", version));
            actions::set_output("new-release-created", "true")?;
            actions::set_output("new-version", &version.to_string())?;
        }
        Ok(RunOutcome::NoRelease) => {
            ui::display_status("No need for new release");
            actions::set_output("new-release-created", "false")?;
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            let _ = actions::set_output("new-release-created", "false");
            std::process::exit(1);
        }
    }

    Ok(())
}
