use anyhow::Result;
use clap::Parser;

use rc_publish::cli::{run_publish_workflow, PublishWorkflowArgs};
use rc_publish::config;
use rc_publish::env::CiEnvironment;
use rc_publish::git::Git2Repository;
use rc_publish::github::GitHubClient;
use rc_publish::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "rc-publish",
    about = "Tag the next release candidate of a release/* branch and create its GitHub release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Remote to fetch tags from and push to")]
    remote: Option<String>,

    #[arg(long, help = "Show the next tag and release without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("rc-publish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_tracing();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let env = match CiEnvironment::from_env() {
        Ok(env) => env,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let store = match Git2Repository::open(".") {
        Ok(repo) => repo.with_token(env.token.clone()),
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let api = match GitHubClient::new(config.github.api_url.clone(), env.token.clone()) {
        Ok(api) => api,
        Err(e) => {
            ui::display_error(&format!("Cannot create GitHub client: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = PublishWorkflowArgs {
        remote: args.remote,
        dry_run: args.dry_run,
    };

    match run_publish_workflow(&workflow_args, &config, &env, &store, &api) {
        Ok(result) => {
            if workflow_args.dry_run {
                let request = serde_json::to_string_pretty(&result.request)?;
                ui::display_json("Release request:", &request);
                for (key, value) in result.outputs() {
                    println!("{}={}", key, value);
                }
                return Ok(());
            }
            println!(
                "\n{} Release candidate {} published for branch {}\n",
                console::style("✓").green(),
                result.tag,
                result.branch
            );
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Failed to create release: {}", e));
            std::process::exit(1);
        }
    }
}
