//! Release-candidate publish workflow
//!
//! Kept apart from `main.rs` so the whole flow can run against a
//! [MockRepository](crate::git::MockRepository) and
//! [MockReleaseApi](crate::github::MockReleaseApi).

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{scan_candidates, CandidateTag, ReleaseBranch};
use crate::env::{append_outputs, CiEnvironment};
use crate::error::Result;
use crate::git::TagStore;
use crate::github::{CreatedRelease, ReleaseApi, ReleaseRequest};
use crate::ui;

/// Arguments for the publish workflow, decoupled from clap
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublishWorkflowArgs {
    /// Remote to fetch from and push to; falls back to the configured one
    pub remote: Option<String>,

    /// Derive and report without tagging, pushing, or creating a release
    pub dry_run: bool,
}

/// Result of a publish run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The candidate tag that was (or would be) created
    pub tag: String,

    /// The release branch the tag was derived from
    pub branch: String,

    /// Public release page written to the step outputs
    pub release_url: String,

    /// The request sent (or that would be sent) to the release API
    pub request: ReleaseRequest,

    /// `None` on a dry run
    pub release: Option<CreatedRelease>,

    /// Non-fatal conditions met along the way
    pub warnings: Vec<BoundaryWarning>,
}

impl WorkflowResult {
    /// Step outputs in the order they are written
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("release_url", self.release_url.clone()),
            ("release_version", self.tag.clone()),
        ]
    }
}

/// Main publish workflow
///
/// 1. Resolve the release branch from the CI ref
/// 2. Fetch tags from the remote
/// 3. Derive the next candidate tag
/// 4. Create and push the tag
/// 5. Register the release
/// 6. Append step outputs
///
/// Every failure is returned immediately; nothing is retried.
pub fn run_publish_workflow<S, A>(
    args: &PublishWorkflowArgs,
    config: &Config,
    env: &CiEnvironment,
    store: &S,
    api: &A,
) -> Result<WorkflowResult>
where
    S: TagStore + ?Sized,
    A: ReleaseApi + ?Sized,
{
    let branch = ReleaseBranch::from_ref(&env.git_ref, &config.release.branch_prefix)?;
    let remote = args.remote.as_deref().unwrap_or(&config.release.remote);
    info!(branch = %branch.name, identifier = %branch.identifier, remote, "publishing release candidate");

    ui::display_status(&format!("Fetching tags from {}...", remote));
    store.fetch_tags(remote)?;

    let existing = store.list_tags(Some(&branch.identifier.tag_glob()))?;
    let scan = scan_candidates(branch.identifier.as_str(), &existing);
    let mut warnings = scan.ignored.clone();
    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }

    let candidate = CandidateTag::new(branch.identifier.clone(), scan.next_number());
    let tag = candidate.name();
    let previous = scan
        .numbers
        .iter()
        .max()
        .map(|n| CandidateTag::new(branch.identifier.clone(), *n).name());
    ui::display_proposed_tag(previous.as_deref(), &tag);

    let request = ReleaseRequest {
        tag_name: tag.clone(),
        name: config.release.render_name(&tag, &branch.name),
        body: config.release.render_body(&tag, &branch.name),
        draft: config.release.draft,
        prerelease: config.release.prerelease,
    };
    let release_url = config
        .github
        .release_page_url(&env.repository.to_string(), &tag);

    if args.dry_run {
        ui::display_status("Dry run: no tag, push, or release will be made");
        return Ok(WorkflowResult {
            tag,
            branch: branch.name,
            release_url,
            request,
            release: None,
            warnings,
        });
    }

    ui::display_status(&format!("Creating and pushing tag: {}", tag));
    store.create_tag(&tag)?;
    store.push_tag(remote, &tag)?;
    ui::display_success(&format!("Pushed tag {} to {}", tag, remote));

    let release = api.create_release(&env.repository, &request)?;
    ui::display_success(&format!("Release {} created successfully.", tag));

    let mut result = WorkflowResult {
        tag,
        branch: branch.name,
        release_url,
        request,
        release: Some(release),
        warnings: Vec::new(),
    };

    match &env.output_file {
        Some(path) => append_outputs(path, &result.outputs())?,
        None => {
            let warning = BoundaryWarning::OutputSinkMissing;
            ui::display_boundary_warning(&warning);
            warnings.push(warning);
        }
    }

    result.warnings = warnings;
    Ok(result)
}
