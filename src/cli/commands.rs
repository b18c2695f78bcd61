//! Command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::adapters::Settings;
use crate::app::{ClipCutOrchestrator, DefaultAppContainer};
use crate::cli::args::{CutArgs, PlanArgs};
use crate::domain::model::QualityMode;

/// Execute the cut command
pub async fn cut(args: CutArgs, settings: &Settings) -> Result<()> {
    let request = args.clip.to_request().context("Invalid cut request")?;
    info!(max_concurrent = settings.cut.max_concurrent, exit_status = ?settings.cut.exit_status, "Executing cut command");

    let container = DefaultAppContainer::new(settings);
    let orchestrator = container.orchestrator();

    match orchestrator.execute(request).await {
        Ok(report) => {
            if args.json {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize cut report to JSON")?;
                println!("{}", json);
            } else {
                println!("Finish cutting file: {}", report.output_path);
                if report.source_deleted {
                    println!("Deleted source file: {}", args.clip.input);
                }
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("Error while cutting file");
            Err(anyhow::Error::new(err))
        }
    }
}

/// Dry-run view of a cut
#[derive(Debug, Serialize)]
struct CutPlan {
    input_path: String,
    output_path: String,
    quality_mode: QualityMode,
    program: String,
    binary: String,
    args: Vec<String>,
    delete_source: bool,
}

/// Execute the plan command
pub fn plan(args: PlanArgs, settings: &Settings) -> Result<()> {
    let request = args.clip.to_request().context("Invalid cut request")?;
    let (paths, spec) = ClipCutOrchestrator::plan(&request).context("Failed to plan cut")?;

    let plan = CutPlan {
        input_path: paths.input_str(),
        output_path: paths.output_str(),
        quality_mode: request.quality_mode,
        binary: settings.executables.resolve(&spec.program).to_string(),
        program: spec.program.clone(),
        args: spec.args.clone(),
        delete_source: request.delete_source_on_success,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan to JSON")?;
        println!("{}", json);
    } else {
        display_plan(&plan, &spec.to_string());
    }

    Ok(())
}

fn display_plan(plan: &CutPlan, command: &str) {
    println!("Input:   {}", plan.input_path);
    println!("Output:  {}", plan.output_path);
    println!("Mode:    {}", plan.quality_mode);
    println!("Binary:  {}", plan.binary);
    println!("Command: {}", command);
    if plan.delete_source {
        println!("Source will be deleted after a successful cut");
    }
}
