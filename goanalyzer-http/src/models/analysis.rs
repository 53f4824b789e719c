use goanalyzer_core::{Analysis, Report, Token, TokenCensus, Violation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request for analyzing source code
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Source text to analyze
    pub code: String,
}

/// Form posted by the HTML page. The field name matches the textarea.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeForm {
    #[serde(default)]
    pub code: String,
}

/// Response for an analysis request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Tokens in input order
    pub tokens: Vec<Token>,
    /// Occurrences per token kind
    pub census: TokenCensus,
    /// Syntactic (structural) result
    pub structure: ReportView,
    /// Semantic (convention) result
    pub conventions: ReportView,
}

/// One checker's result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportView {
    /// Whether no violation was found
    pub valid: bool,
    /// Success text, or all messages joined by spaces
    pub summary: String,
    /// Violations in detection order
    pub violations: Vec<ViolationView>,
}

/// A single violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViolationView {
    /// Stable violation code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl<V: Violation> From<&Report<V>> for ReportView {
    fn from(report: &Report<V>) -> Self {
        Self {
            valid: report.is_clean(),
            summary: report.summary(),
            violations: report
                .violations()
                .iter()
                .map(|v| ViolationView {
                    code: v.code().to_string(),
                    message: v.to_string(),
                })
                .collect(),
        }
    }
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            structure: ReportView::from(&analysis.structure),
            conventions: ReportView::from(&analysis.conventions),
            census: analysis.lexical.census,
            tokens: analysis.lexical.tokens,
        }
    }
}
