// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed domain model for seating plans, guests, tables, and weights.

pub mod fixtures;
pub mod guest;
pub mod ids;
pub mod plan;
pub mod table;
pub mod weights;

pub use guest::{Guest, GuestAttributes, GuestDirectory};
pub use ids::{GuestId, Id, IdError, TableId};
pub use plan::{SeatAssignment, SeatingMetrics, SeatingPlan, TableSeating};
pub use table::{TableShape, TableShapes};
pub use weights::Weights;
