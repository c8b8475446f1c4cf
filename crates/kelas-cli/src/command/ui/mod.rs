//! Interactive terminal interface
//!
//! A sidebar menu switches between the two informational pages and the
//! analysis page, where a CSV file is loaded, classified and exported.

use std::path::PathBuf;

use crate::tui::Tui;

use self::{app::ClassroomApp, session::AnalysisSession};

mod app;
mod pages;
mod session;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct UiArg {
    /// CSV file to load on startup
    #[arg(long)]
    input: Option<PathBuf>,

    /// Initial number of clusters
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=10))]
    clusters: u16,

    /// Path the workbook is exported to
    #[arg(long)]
    export_path: Option<PathBuf>,

    /// Seed for K-means; a fresh seed is drawn for every run when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for UiArg {
    fn default() -> Self {
        Self {
            input: None,
            clusters: 3,
            export_path: None,
            seed: None,
        }
    }
}

pub(crate) fn run(arg: &UiArg) -> anyhow::Result<()> {
    let UiArg {
        input,
        clusters,
        export_path,
        seed,
    } = arg;

    let session = AnalysisSession::new(usize::from(*clusters), *seed, export_path.clone());
    let mut app = ClassroomApp::new(session);
    if let Some(input) = input {
        app.open_analysis(input);
    }

    tracing::info!("starting terminal ui");
    Tui::new().run(&mut app)
}
