//! # Tabview TUI Library
//!
//! Terminal control/render surface for a [`TabularView`]: a search input,
//! sortable column headers, the current page of rows, First/Prev/Next/Last
//! controls with the range label, row actions, and a hint bar.
//!
//! ## Architecture
//!
//! The surface follows a component-based architecture. The search panel,
//! the table and the pagination row are separate components that read and
//! mutate the shared `App` and report side effects (`ViewEffect`) back to
//! the runtime instead of acting on them.

mod app;
mod ui;

use anyhow::Result;
use tabview_engine::TabularView;

pub use app::ViewEffect;

/// Runs the interactive viewer until the user quits.
///
/// # Errors
///
/// Terminal setup, drawing or teardown failures.
pub async fn run(view: TabularView) -> Result<()> {
    let app = app::App::new(view, ui::theme::load());
    let app = ui::runtime::run_app(app).await?;
    if let Some(status) = app.status {
        tracing::debug!(last_action = %status, "Viewer closed");
    }
    Ok(())
}
