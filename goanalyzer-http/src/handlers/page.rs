use axum::{Form, extract::State, http::StatusCode, response::Html};
use tracing::{info, warn};

use crate::{
    models::CodeForm,
    render::{render_page, render_rejected},
    server::AppState,
};

use super::run_analysis;

/// Serve the empty form
pub async fn index() -> Html<String> {
    Html(render_page("", None))
}

/// Analyze the submitted form and render the results page. Rejected input
/// gets the page back with the reason instead of the JSON error body.
pub async fn analyze_form(
    State(state): State<AppState>,
    Form(form): Form<CodeForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match run_analysis(&state, form.code.clone()).await {
        Ok(analysis) => {
            info!(tokens = analysis.lexical.len(), "form analysis served");
            Ok(Html(render_page(&form.code, Some(&analysis))))
        }
        Err(error) => {
            let status = error.status_code();
            warn!(%status, "form submission rejected: {}", error);
            Err((status, Html(render_rejected(&form.code, &error.to_string()))))
        }
    }
}
