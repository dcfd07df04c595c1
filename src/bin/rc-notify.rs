use anyhow::Result;
use clap::Parser;

use rc_publish::cli::{run_notify_workflow, NotifyWorkflowArgs};
use rc_publish::config;
use rc_publish::domain::RunStatus;
use rc_publish::{logging, ui};

#[derive(clap::Parser)]
#[command(name = "rc-notify", about = "Send Teams Notification")]
struct Args {
    #[arg(long, help = "Teams incoming webhook URL")]
    webhook_url: String,

    #[arg(long, value_enum, default_value_t = RunStatus::Success, help = "Pipeline run status")]
    status: RunStatus,

    #[arg(long = "ref", help = "Version or ref shown on the run card")]
    git_ref: Option<String>,

    #[arg(long, help = "Link to the workflow run")]
    run_url: Option<String>,

    #[arg(long, help = "Deployment environment name")]
    environment: Option<String>,

    #[arg(long, help = "Comma-separated SKU list")]
    skus: Option<String>,

    #[arg(long, help = "Release version, e.g. 2510.1; sends a release card")]
    release_version: Option<String>,

    #[arg(long, alias = "release_url", help = "Link to release notes")]
    release_url: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the payload without sending it")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = NotifyWorkflowArgs {
        webhook_url: args.webhook_url,
        status: args.status,
        git_ref: args.git_ref,
        run_url: args.run_url,
        environment: args.environment,
        skus: args.skus,
        release_version: args.release_version,
        release_url: args.release_url,
        dry_run: args.dry_run,
    };

    if let Err(e) = run_notify_workflow(&workflow_args, &config.notify) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
