//! Hierarchy projector.
//!
//! A [`HierarchyShape`] names a root level, a nesting depth and the fields
//! kept at each depth. The same shape tells the service which levels to read
//! and tells [`HierarchyShape::assemble`] how to fold the flat rows into
//! nested JSON.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::features::regions::models::{Level, RegionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    ParentId,
}

/// Fixed set of fields emitted for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection(&'static [Field]);

impl Projection {
    pub const ID_NAME: Projection = Projection(&[Field::Id, Field::Name]);
    pub const ID_NAME_PARENT: Projection = Projection(&[Field::Id, Field::Name, Field::ParentId]);

    /// Render `row` as a JSON object holding exactly the projected fields.
    ///
    /// `ParentId` is skipped for the root level, which has no parent key.
    pub fn project(&self, level: Level, row: &RegionRow) -> Map<String, Value> {
        let mut object = Map::new();
        for field in self.0 {
            match field {
                Field::Id => {
                    object.insert(level.id_key().to_string(), Value::from(row.id));
                }
                Field::Name => {
                    object.insert("name".to_string(), Value::from(row.name.clone()));
                }
                Field::ParentId => {
                    if let Some(key) = level.parent_key() {
                        object.insert(key.to_string(), Value::from(row.parent_id));
                    }
                }
            }
        }
        object
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HierarchyShape {
    root: Level,
    /// One projection per level, starting at `root`
    projections: &'static [Projection],
}

impl HierarchyShape {
    /// Deepest supported nesting (province down to village)
    pub const MAX_DEPTH: usize = 4;

    pub const fn new(root: Level, projections: &'static [Projection]) -> Self {
        assert!(!projections.is_empty(), "a shape needs at least its root level");
        assert!(
            root.depth() + projections.len() <= Self::MAX_DEPTH + 1,
            "shape nests below the village level"
        );
        Self { root, projections }
    }

    pub const fn flat(root: Level, projection: &'static [Projection; 1]) -> Self {
        Self::new(root, projection)
    }

    /// Number of nested levels below the root (0 for a flat listing)
    pub const fn depth(&self) -> usize {
        self.projections.len() - 1
    }

    pub const fn root(&self) -> Level {
        self.root
    }

    /// Levels read for this shape, root first
    pub fn levels(&self) -> Vec<Level> {
        Level::ALL[self.root.depth()..=self.root.depth() + self.depth()].to_vec()
    }

    /// Fold one row set per level (as ordered by [`levels`](Self::levels))
    /// into the nested response.
    ///
    /// Rows keep the order the store returned them in. Children whose parent
    /// row is absent are dropped.
    pub fn assemble(&self, mut rows_by_level: Vec<Vec<RegionRow>>) -> Vec<Value> {
        debug_assert_eq!(rows_by_level.len(), self.projections.len());

        let levels = self.levels();
        let mut children: HashMap<i32, Vec<Value>> = HashMap::new();

        for (index, level) in levels.iter().enumerate().rev() {
            let rows = std::mem::take(&mut rows_by_level[index]);
            let projection = self.projections[index];
            let nested_key = level
                .child()
                .filter(|_| index < self.depth())
                .map(Level::collection_key);

            let mut grouped: HashMap<i32, Vec<Value>> = HashMap::new();
            let mut roots = Vec::new();

            for row in rows {
                let mut object = projection.project(*level, &row);
                if let Some(key) = nested_key {
                    let nested = children.remove(&row.id).unwrap_or_default();
                    object.insert(key.to_string(), Value::Array(nested));
                }

                if index == 0 {
                    roots.push(Value::Object(object));
                } else if let Some(parent_id) = row.parent_id {
                    grouped.entry(parent_id).or_default().push(Value::Object(object));
                }
            }

            if index == 0 {
                return roots;
            }
            children = grouped;
        }

        Vec::new()
    }
}

pub mod shapes {
    //! The nine listing shapes served over HTTP.

    use super::{HierarchyShape, Projection};
    use crate::features::regions::models::Level;

    const ID_NAME: Projection = Projection::ID_NAME;
    const ID_NAME_PARENT: Projection = Projection::ID_NAME_PARENT;

    pub const PROVINCES: HierarchyShape = HierarchyShape::flat(Level::Province, &[ID_NAME]);
    pub const DISTRICTS: HierarchyShape = HierarchyShape::flat(Level::District, &[ID_NAME_PARENT]);
    pub const SECTORS: HierarchyShape = HierarchyShape::flat(Level::Sector, &[ID_NAME_PARENT]);
    pub const CELLS: HierarchyShape = HierarchyShape::flat(Level::Cell, &[ID_NAME_PARENT]);
    pub const VILLAGES: HierarchyShape = HierarchyShape::flat(Level::Village, &[ID_NAME_PARENT]);

    pub const PROVINCES_DISTRICTS: HierarchyShape =
        HierarchyShape::new(Level::Province, &[ID_NAME, ID_NAME_PARENT]);

    pub const PROVINCES_TO_SECTORS: HierarchyShape =
        HierarchyShape::new(Level::Province, &[ID_NAME, ID_NAME_PARENT, ID_NAME_PARENT]);

    // Below districts the deeper listings drop the parent key
    pub const PROVINCES_TO_CELLS: HierarchyShape =
        HierarchyShape::new(Level::Province, &[ID_NAME, ID_NAME_PARENT, ID_NAME, ID_NAME]);

    pub const PROVINCES_TO_VILLAGES: HierarchyShape = HierarchyShape::new(
        Level::Province,
        &[ID_NAME, ID_NAME_PARENT, ID_NAME, ID_NAME, ID_NAME],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: i32, name: &str, parent_id: Option<i32>) -> RegionRow {
        RegionRow::new(id, name, parent_id)
    }

    #[test]
    fn test_projection_root_skips_parent() {
        let object = Projection::ID_NAME_PARENT.project(Level::Province, &row(1, "KIGALI CITY", None));
        assert_eq!(
            Value::Object(object),
            json!({ "provinceId": 1, "name": "KIGALI CITY" })
        );
    }

    #[test]
    fn test_projection_id_name_drops_parent() {
        let object = Projection::ID_NAME.project(Level::Cell, &row(7, "Kigarama", Some(3)));
        assert_eq!(Value::Object(object), json!({ "cellId": 7, "name": "Kigarama" }));
    }

    #[test]
    fn test_shape_levels_and_depth() {
        assert_eq!(shapes::VILLAGES.levels(), vec![Level::Village]);
        assert_eq!(shapes::VILLAGES.depth(), 0);
        assert_eq!(shapes::PROVINCES_TO_SECTORS.depth(), 2);
        assert_eq!(
            shapes::PROVINCES_TO_VILLAGES.levels(),
            Level::ALL.to_vec()
        );
    }

    #[test]
    fn test_assemble_flat() {
        let result = shapes::DISTRICTS.assemble(vec![vec![
            row(11, "NYARUGENGE", Some(1)),
            row(21, "NYANZA", Some(2)),
        ]]);
        assert_eq!(
            result,
            vec![
                json!({ "districtId": 11, "name": "NYARUGENGE", "provinceId": 1 }),
                json!({ "districtId": 21, "name": "NYANZA", "provinceId": 2 }),
            ]
        );
    }

    #[test]
    fn test_assemble_nests_children_and_keeps_empty_arrays() {
        let result = shapes::PROVINCES_DISTRICTS.assemble(vec![
            vec![row(1, "KIGALI CITY", None), row(5, "EMPTY PROVINCE", None)],
            vec![row(11, "NYARUGENGE", Some(1)), row(12, "GASABO", Some(1))],
        ]);
        assert_eq!(
            result,
            vec![
                json!({
                    "provinceId": 1,
                    "name": "KIGALI CITY",
                    "districts": [
                        { "districtId": 11, "name": "NYARUGENGE", "provinceId": 1 },
                        { "districtId": 12, "name": "GASABO", "provinceId": 1 }
                    ]
                }),
                json!({ "provinceId": 5, "name": "EMPTY PROVINCE", "districts": [] }),
            ]
        );
    }

    #[test]
    fn test_assemble_stops_at_shape_depth() {
        let result = shapes::PROVINCES_TO_SECTORS.assemble(vec![
            vec![row(1, "KIGALI CITY", None)],
            vec![row(11, "NYARUGENGE", Some(1))],
            vec![row(111, "GITEGA", Some(11))],
        ]);
        let sector = &result[0]["districts"][0]["sectors"][0];
        assert_eq!(
            sector,
            &json!({ "sectorId": 111, "name": "GITEGA", "districtId": 11 })
        );
        assert!(sector.get("cells").is_none());
    }

    #[test]
    fn test_assemble_drops_orphans() {
        let result = shapes::PROVINCES_DISTRICTS.assemble(vec![
            vec![row(1, "KIGALI CITY", None)],
            vec![row(99, "ORPHAN", Some(42))],
        ]);
        assert_eq!(result[0]["districts"], json!([]));
    }

    #[test]
    fn test_assemble_empty_input() {
        assert!(shapes::PROVINCES_TO_VILLAGES
            .assemble(vec![vec![], vec![], vec![], vec![], vec![]])
            .is_empty());
    }
}
