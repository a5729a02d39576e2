use std::fmt;

/// One of the five administrative levels, ordered from the root down.
///
/// Each level knows how it is stored (table and column names) and how it is
/// rendered in JSON (`provinceId`, `districts`, `province`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Province,
    District,
    Sector,
    Cell,
    Village,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Province,
        Level::District,
        Level::Sector,
        Level::Cell,
        Level::Village,
    ];

    /// Distance from the root (province = 0, village = 4)
    pub const fn depth(self) -> usize {
        match self {
            Level::Province => 0,
            Level::District => 1,
            Level::Sector => 2,
            Level::Cell => 3,
            Level::Village => 4,
        }
    }

    pub const fn parent(self) -> Option<Level> {
        match self {
            Level::Province => None,
            Level::District => Some(Level::Province),
            Level::Sector => Some(Level::District),
            Level::Cell => Some(Level::Sector),
            Level::Village => Some(Level::Cell),
        }
    }

    pub const fn child(self) -> Option<Level> {
        match self {
            Level::Province => Some(Level::District),
            Level::District => Some(Level::Sector),
            Level::Sector => Some(Level::Cell),
            Level::Cell => Some(Level::Village),
            Level::Village => None,
        }
    }

    pub const fn table(self) -> &'static str {
        match self {
            Level::Province => "provinces",
            Level::District => "districts",
            Level::Sector => "sectors",
            Level::Cell => "cells",
            Level::Village => "villages",
        }
    }

    pub const fn id_column(self) -> &'static str {
        match self {
            Level::Province => "province_id",
            Level::District => "district_id",
            Level::Sector => "sector_id",
            Level::Cell => "cell_id",
            Level::Village => "village_id",
        }
    }

    pub fn parent_column(self) -> Option<&'static str> {
        self.parent().map(Level::id_column)
    }

    /// JSON key of the identity field
    pub const fn id_key(self) -> &'static str {
        match self {
            Level::Province => "provinceId",
            Level::District => "districtId",
            Level::Sector => "sectorId",
            Level::Cell => "cellId",
            Level::Village => "villageId",
        }
    }

    /// JSON key of the foreign key to the parent
    pub fn parent_key(self) -> Option<&'static str> {
        self.parent().map(Level::id_key)
    }

    /// JSON key under which rows of this level are nested in their parent
    pub const fn collection_key(self) -> &'static str {
        self.table()
    }

    /// JSON key under which a single row of this level is attached to a child
    pub const fn singular_key(self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::District => "district",
            Level::Sector => "sector",
            Level::Cell => "cell",
            Level::Village => "village",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Level::Province => "Province",
            Level::District => "District",
            Level::Sector => "Sector",
            Level::Cell => "Cell",
            Level::Village => "Village",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_child_are_inverse() {
        for level in Level::ALL {
            if let Some(child) = level.child() {
                assert_eq!(child.parent(), Some(level));
                assert_eq!(child.depth(), level.depth() + 1);
            }
        }
        assert_eq!(Level::Province.parent(), None);
        assert_eq!(Level::Village.child(), None);
    }

    #[test]
    fn test_parent_keys_follow_parent_ids() {
        assert_eq!(Level::Province.parent_key(), None);
        assert_eq!(Level::District.parent_key(), Some("provinceId"));
        assert_eq!(Level::Village.parent_key(), Some("cellId"));
        assert_eq!(Level::Cell.parent_column(), Some("sector_id"));
    }

    #[test]
    fn test_json_keys() {
        assert_eq!(Level::Sector.collection_key(), "sectors");
        assert_eq!(Level::Sector.singular_key(), "sector");
        assert_eq!(Level::Sector.to_string(), "Sector");
    }
}
