use std::path::PathBuf;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use testgen_core::prompt::{build_user_message, combine_sources};
use testgen_core::report::transform_run_results;

use crate::prelude::{eprintln, println, *};

pub mod collect;
pub mod completion;
pub mod config;
pub mod output;
pub mod template;

use completion::{CompletionBackend, GithubModelsClient};
use config::GeneratorConfig;

/// One hardcoded component category.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// Subdirectory of the project root, also the display name.
    pub kind: &'static str,
    /// Template file name under the prompts directory.
    pub template: &'static str,
}

/// Component categories processed on every run, in order. All share the
/// same instructional template.
const COMPONENTS: &[Component] = &[
    Component {
        kind: "controllers",
        template: "initial.yaml",
    },
    Component {
        kind: "models",
        template: "initial.yaml",
    },
    Component {
        kind: "utils",
        template: "initial.yaml",
    },
];

/// Options for the generate command
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GenerateOptions {
    /// Root of the C++ project to scan (overrides TESTGEN_PROJECT_ROOT env var)
    #[clap(long)]
    pub project_root: Option<PathBuf>,

    /// Directory for generated test files (overrides TESTGEN_OUTPUT_DIR env var;
    /// defaults to generated_tests under the project root)
    #[clap(long)]
    pub output_dir: Option<PathBuf>,

    /// Directory holding prompt templates (overrides TESTGEN_PROMPTS_DIR env var)
    #[clap(long)]
    pub prompts_dir: Option<PathBuf>,

    /// Chat-completion endpoint base URL (overrides TESTGEN_ENDPOINT env var)
    #[clap(long)]
    pub endpoint: Option<String>,

    /// Model identifier for test generation (overrides TESTGEN_MODEL env var)
    #[clap(long)]
    pub model: Option<String>,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Helper to set spinner message if spinner is present
fn set_spinner_msg(spinner: Option<&ProgressBar>, msg: impl Into<String>) {
    if let Some(s) = spinner {
        s.set_message(msg.into());
    }
}

/// Print a progress line above the spinner, or plainly when there is none.
fn progress_println(spinner: Option<&ProgressBar>, msg: String) {
    match spinner {
        Some(s) => s.println(msg),
        None => println!("{msg}"),
    }
}

/// Handle the generate command
pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    println!(
        "{}",
        "=== Unit Test Generator: Controllers, Models, Utils ==="
            .bright_cyan()
            .bold()
    );

    // Credential loading happens here, before any client exists, so a
    // missing token aborts without a single network call.
    let config = GeneratorConfig::from_env()?.with_overrides(&options);

    if global.verbose {
        eprintln!("Endpoint: {}", config.endpoint);
        eprintln!("Model: {}", config.model);
        eprintln!("Project root: {}", config.project_root.display());
        eprintln!("Output directory: {}", config.output_dir().display());
    }

    let backend = GithubModelsClient::new(&config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut results = Vec::new();
    for component in COMPONENTS {
        let written =
            process_component(&backend, &config, component, global.verbose, Some(&spinner)).await?;
        results.push((
            component.kind.to_string(),
            written.iter().map(|p| p.display().to_string()).collect(),
        ));
    }

    spinner.finish_and_clear();

    let report = transform_run_results(results);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "\n{} {} test file(s)",
            "Generated".green().bold(),
            report.total_tests
        );
        for component in &report.components {
            println!(
                "  {} ({})",
                component.component_type.bold(),
                component.tests.len()
            );
            for test in &component.tests {
                println!("    {test}");
            }
        }
    }

    Ok(())
}

/// Generate tests for one component category, returning the written paths.
///
/// Strictly sequential: each group is read, sent, and written before the
/// next begins, and the first error aborts the remainder of the run.
pub async fn process_component<B: CompletionBackend>(
    backend: &B,
    config: &GeneratorConfig,
    component: &Component,
    verbose: bool,
    spinner: Option<&ProgressBar>,
) -> Result<Vec<PathBuf>, Error> {
    progress_println(
        spinner,
        format!(
            "{} Generating unit tests for {}...",
            "[Step]".bright_cyan(),
            component.kind
        ),
    );

    let template = template::load_template(&config.prompts_dir, component.template).await?;
    let source_dir = config.component_dir(component.kind);
    let groups = collect::collect_source_files(&source_dir)?;

    progress_println(
        spinner,
        format!(
            "Found {} unique component(s) in {}: {:?}",
            groups.len(),
            source_dir.display(),
            groups.keys().collect::<Vec<_>>()
        ),
    );

    let mut written = Vec::new();
    for (base_name, paths) in &groups {
        set_spinner_msg(spinner, format!("Generating test for {base_name}..."));
        progress_println(
            spinner,
            format!("Generating test for: {base_name} (from {paths:?})"),
        );

        let files = collect::read_source_files(paths).await?;
        let combined = combine_sources(&files);
        let user_message = build_user_message(&template, &combined);

        if verbose {
            eprintln!("Prompt length: {} chars", user_message.len());
        }

        let test_code = backend.complete(&user_message).await?;
        let path = output::write_test_file(&config.output_dir(), base_name, &test_code).await?;

        progress_println(spinner, format!("Test file written: {}", path.display()));
        written.push(path);
    }

    Ok(written)
}
