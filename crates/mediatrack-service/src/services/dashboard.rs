//! Dashboard chart service
//!
//! Aggregates contact-dimension memberships (categories, countries, beats)
//! into chart-ready series.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{instrument, warn};

use mediatrack_cache::keys;
use mediatrack_core::traits::DimensionRow;
use mediatrack_core::{ChartType, TimeRange};

use crate::dto::ChartPointResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Fallback palette for dimensions without a stored color, assigned by
/// first-seen order and cycling past ten labels
const CHART_PALETTE: [&str; 10] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
    "#6366F1", "#84CC16",
];

/// Country charts show only the largest buckets
const COUNTRY_CHART_LIMIT: usize = 10;

/// Dashboard aggregation service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build one chart series for the given dimension and time window.
    ///
    /// A contact belonging to N dimensions contributes one count to each of
    /// the N buckets, so bucket sums exceed the contact count under
    /// multi-membership. Country series are sorted by count descending and
    /// capped; category and beat series keep first-seen order.
    #[instrument(skip(self))]
    pub async fn get_chart_data(
        &self,
        chart: ChartType,
        range: TimeRange,
    ) -> ServiceResult<Vec<ChartPointResponse>> {
        let cache_key = keys::chart_data(chart, range);
        if let Some(cached) = self.ctx.cache().get_as::<Vec<ChartPointResponse>>(&cache_key) {
            return Ok(cached);
        }

        let since = range.since(self.ctx.clock().now());
        let rows = match chart {
            ChartType::Category => self.ctx.contact_repo().category_rows_since(since).await?,
            ChartType::Country => self.ctx.contact_repo().country_rows_since(since).await?,
            ChartType::Beat => self.ctx.contact_repo().beat_rows_since(since).await?,
        };

        let mut series = fold_rows(&rows);

        if chart == ChartType::Country {
            // Stable sort keeps first-seen order among equal counts
            series.sort_by(|a, b| b.value.cmp(&a.value));
            series.truncate(COUNTRY_CHART_LIMIT);
        }

        let ttl = Duration::from_secs(self.ctx.cache_config().charts_ttl_secs);
        if let Err(e) = self.ctx.cache().set(&cache_key, &series, ttl) {
            warn!(key = %cache_key, error = %e, "Failed to cache chart series");
        }

        Ok(series)
    }
}

/// Fold membership rows into labeled buckets, one increment per row.
/// Bucket order is the order labels first appear in the row stream.
fn fold_rows(rows: &[DimensionRow]) -> Vec<ChartPointResponse> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<ChartPointResponse> = Vec::new();

    for row in rows {
        match index.get(row.label.as_str()) {
            Some(&i) => series[i].value += 1,
            None => {
                let color = row
                    .color
                    .clone()
                    .unwrap_or_else(|| CHART_PALETTE[series.len() % CHART_PALETTE.len()].to_string());
                index.insert(row.label.as_str(), series.len());
                series.push(ChartPointResponse {
                    label: row.label.clone(),
                    value: 1,
                    color,
                    metadata: None,
                });
            }
        }
    }

    series
}
