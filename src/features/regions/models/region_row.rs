use sqlx::FromRow;

/// A row of any administrative level.
///
/// Every level shares the same shape (identity, name, parent foreign key),
/// so the store hands back this single read model and the projector decides
/// which of the fields reach the client.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RegionRow {
    pub id: i32,
    pub name: String,
    /// `None` only for provinces
    pub parent_id: Option<i32>,
}

impl RegionRow {
    #[cfg(test)]
    pub fn new(id: i32, name: impl Into<String>, parent_id: Option<i32>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }
}
