// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::ids::TableId;

/// The two supported table footprints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableShape {
    #[default]
    Round,
    Trestle,
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Round => f.write_str("Round"),
            Self::Trestle => f.write_str("Trestle"),
        }
    }
}

/// Shape lookup keyed by table id. Ids without an entry resolve to round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableShapes {
    shapes: BTreeMap<TableId, TableShape>,
}

impl TableShapes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table_id: TableId, shape: TableShape) -> Option<TableShape> {
        self.shapes.insert(table_id, shape)
    }

    pub fn shape_of(&self, table_id: &TableId) -> TableShape {
        self.shapes.get(table_id).copied().unwrap_or_default()
    }
}

impl FromIterator<(TableId, TableShape)> for TableShapes {
    fn from_iter<I: IntoIterator<Item = (TableId, TableShape)>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}
