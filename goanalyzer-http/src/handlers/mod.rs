pub mod analysis;
pub mod page;

// Re-export all handlers for easier imports
pub use analysis::*;
pub use page::*;

use crate::{error::AppError, server::AppState};
use goanalyzer_core::Analysis;

/// Runs the analyzer off the async executor; the scan is CPU-bound.
pub(crate) async fn run_analysis(state: &AppState, code: String) -> Result<Analysis, AppError> {
    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&code))
        .await
        .map_err(|e| AppError::Internal(format!("Analysis task failed: {}", e)))??;
    Ok(analysis)
}
