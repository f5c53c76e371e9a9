//! Emergent trend detection
//!
//! A trend is emergent when its percentage growth strictly exceeds a
//! threshold. Negative thresholds are legal and also admit shrinking trends
//! above that bound.

use crate::models::GrowthMap;

use super::error::{AnalysisError, AnalysisResult};

/// Default percentage growth above which a trend is emergent
pub const DEFAULT_EMERGENCE_THRESHOLD: f64 = 10.0;

/// Select the growth entries whose `percent_change` strictly exceeds `threshold`
///
/// # Errors
/// `AnalysisError::Validation` if `threshold` is NaN or infinite.
pub fn emergent_trends(growth: &GrowthMap, threshold: f64) -> AnalysisResult<GrowthMap> {
    if !threshold.is_finite() {
        return Err(AnalysisError::validation(format!(
            "emergence threshold must be a finite number, got {threshold}"
        )));
    }

    let emergent: GrowthMap = growth
        .iter()
        .filter(|(_, result)| result.percent_change > threshold)
        .map(|(trend, result)| (trend.clone(), *result))
        .collect();

    tracing::debug!(
        threshold,
        candidates = growth.len(),
        emergent = emergent.len(),
        "Filtered emergent trends"
    );

    Ok(emergent)
}
