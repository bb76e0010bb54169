use crate::{
    hero::HeroModel,
    row::{RowId, RowState},
};

/// One row slot of the home page, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutRow {
    pub id: RowId,
    pub label: String,
    pub state: RowState,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HomeLayout {
    pub hero: Option<HeroModel>,
    pub rows: Vec<LayoutRow>,
}

impl HomeLayout {
    pub fn row(&self, id: &RowId) -> Option<&RowState> {
        self.rows
            .iter()
            .find(|row| &row.id == id)
            .map(|row| &row.state)
    }

    pub fn row_mut(&mut self, id: &RowId) -> Option<&mut RowState> {
        self.rows
            .iter_mut()
            .find(|row| &row.id == id)
            .map(|row| &mut row.state)
    }

    /// Number of rows that ended up `Failed`.
    pub fn failed_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.state, RowState::Failed { .. }))
            .count()
    }
}
