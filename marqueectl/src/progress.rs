use marquee_core::{AggregateError, AggregationObserver, ObserverError};
use marquee_model::{HeroModel, LayoutRow, RowState};
use tracing::{info, warn};

/// Logs each part of the layout as it lands.
#[derive(Debug, Default)]
pub struct ProgressObserver {
    rows_done: usize,
}

impl AggregationObserver for ProgressObserver {
    fn hero_ready(&mut self, hero: &HeroModel) {
        info!(
            title = %hero.display_title(),
            badge = hero.badge.as_str(),
            "hero ready"
        );
    }

    fn row_ready(
        &mut self,
        row: &LayoutRow,
    ) -> Result<(), ObserverError> {
        self.rows_done += 1;
        match &row.state {
            RowState::Ready(resolved) if resolved.is_empty() => {
                info!(row = %row.id, label = %row.label, "row empty")
            }
            RowState::Ready(resolved) => {
                info!(row = %row.id, label = %row.label, movies = resolved.len(), "row ready")
            }
            RowState::Failed { message } => {
                warn!(row = %row.id, label = %row.label, %message, "row failed")
            }
            RowState::Loading => {}
        }
        Ok(())
    }

    fn aggregation_failed(
        &mut self,
        error: &AggregateError,
        pending: &[LayoutRow],
    ) {
        warn!(
            error = %error,
            completed = self.rows_done,
            pending = pending.len(),
            "aggregation stopped early"
        );
    }
}
