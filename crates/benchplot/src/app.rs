//! Application entry point and dispatch.

use anyhow::{Context, Result};
use serde::Serialize;

use benchplot_cli::presenter::TextChartRenderer;
use benchplot_cli::prompt::Prompter;
use benchplot_cli::ui;
use benchplot_core::samples::read_samples;
use benchplot_core::{
    ChartRenderer, ChartSpec, ChunkAverager, ExecutionMode, ModeRegrouper, PlotError,
    RecordingRenderer, Regrouped, ShapeWarning,
};
use benchplot_tui::ChartViewer;

use crate::config::{AppConfig, OutputKind, RunConfig};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        benchplot_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // JSON goes to stdout, so prompts for it go to stderr.
    let resolved = if config.json {
        config.resolve(&mut Prompter::stderr())
    } else {
        config.resolve(&mut Prompter::stdio())
    };
    let run = resolved.context("reading interactive input")?;
    tracing::debug!(?run, "resolved configuration");

    match run.output {
        OutputKind::Viewer => {
            execute(&run, &mut ChartViewer::new())?;
        }
        OutputKind::Text => {
            execute(&run, &mut TextChartRenderer::stdout())?;
        }
        OutputKind::Json => {
            let mut recorder = RecordingRenderer::default();
            let regrouped = execute(&run, &mut recorder)?;
            let report = JsonReport {
                mode: regrouped.mode(),
                chunk_size: run.chunk_size,
                warnings: regrouped.warnings(),
                charts: &recorder.charts,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    mode: ExecutionMode,
    chunk_size: usize,
    warnings: &'a [ShapeWarning],
    charts: &'a [ChartSpec],
}

/// Read, average, regroup, and hand both charts to `renderer`.
///
/// The mode selector is validated after the samples are averaged; an
/// invalid selector renders nothing.
pub fn execute(run: &RunConfig, renderer: &mut dyn ChartRenderer) -> Result<Regrouped, PlotError> {
    let averager = ChunkAverager::new(run.chunk_size)?;
    let samples = read_samples(&run.input)?;
    let averages = averager.average(&samples);
    tracing::debug!(
        samples = samples.len(),
        chunks = averages.len(),
        "averaged input"
    );

    let mode: ExecutionMode = run.mode.parse()?;
    let regrouped = ModeRegrouper::new(mode).regroup(&averages);
    if !run.quiet {
        for warning in regrouped.warnings() {
            ui::print_warning(&warning.to_string());
        }
    }

    for chart in regrouped.charts() {
        renderer.render(&chart)?;
    }
    Ok(regrouped)
}
