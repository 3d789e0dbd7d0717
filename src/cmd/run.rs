//! The size check: resolve requests, measure, report

use crate::config::{ConfigLoader, ProjectManifest};
use crate::error::{SizeLimitError, EXIT_SUCCESS};
use crate::evaluate::{Evaluator, MeasurementResult};
use crate::measure::Measurer;
use crate::options::RunOptions;
use crate::report::{self, JsonReport};
use crate::request::{build_legacy, MeasurementRequest, RequestBuilder};
use anyhow::{Context, Result};
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Run one size check and return the process exit code
///
/// Positional files select the legacy path; otherwise the configuration is
/// located from the working directory. Any error aborts the run before
/// results are printed.
pub fn cmd_run<M: Measurer>(options: &RunOptions, measurer: &M) -> Result<i32> {
    if options.why && options.json {
        return Err(SizeLimitError::WhyWithJson.into());
    }

    let requests = build_requests(options)?;
    log::info!("Checking {} request(s)", requests.len());

    let evaluator = Evaluator::new(measurer, options);
    let spinner = spinner(options);
    let evaluated = evaluator.evaluate(requests);
    spinner.finish_and_clear();
    let results = evaluated?;

    print_results(options, &results)?;

    if options.why && results.len() > 1 {
        evaluator.explain_all(&results)?;
        return Ok(EXIT_SUCCESS);
    }

    Ok(report::exit_code(&results))
}

fn build_requests(options: &RunOptions) -> Result<Vec<MeasurementRequest>> {
    if options.is_legacy() {
        log::debug!("Using positional files: {:?}", options.files);
        return Ok(vec![build_legacy(options)?]);
    }

    let loaded = ConfigLoader::resolve(&options.cwd)?;
    log::debug!("Loaded configuration from {}", loaded.filepath.display());

    let manifest = ProjectManifest::find(&options.cwd)?.map(|(_, manifest)| manifest);
    Ok(RequestBuilder::new(&loaded, manifest.as_ref()).build()?)
}

fn print_results(options: &RunOptions, results: &[MeasurementResult]) -> Result<()> {
    if options.json {
        let json = JsonReport::new(results)
            .to_json()
            .context("Failed to serialize JSON output")?;
        println!("{}", json);
    } else {
        print!("{}", report::render(results));
    }
    Ok(())
}

fn spinner(options: &RunOptions) -> ProgressBar {
    if options.json || options.why || !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Measuring sizes");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
