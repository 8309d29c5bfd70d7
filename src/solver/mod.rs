// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types for the external solver's JSON payloads.
//!
//! These mirror the solver's camelCase schema verbatim. Structural validation
//! of malformed payloads happens at the serde layer (upstream of the core);
//! conversion into model types can only fail on ids the model cannot
//! represent.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    Guest, GuestAttributes, GuestDirectory, GuestId, IdError, SeatAssignment, SeatingMetrics,
    SeatingPlan, TableId, TableSeating, TableShape, TableShapes, Weights,
};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatingPlanResponse {
    pub tables: Vec<TableSeatingDto>,
    pub metrics: MetricsDto,
    pub attempts_made: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSeatingDto {
    pub table_id: String,
    pub seats: Vec<SeatDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatDto {
    pub seat_index: u32,
    pub guest_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDto {
    pub must_not_violations: u64,
    pub wants_satisfied: u64,
    pub adjacent_singles: u64,
    pub same_gender_adjacencies: u64,
    pub alternating_tables: u64,
    pub split_couples: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attributes: GuestAttributesDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestAttributesDto {
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub wants_by_name: Vec<String>,
    #[serde(default)]
    pub must_not_by_name: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeDto {
    Round,
    Trestle,
}

impl From<ShapeDto> for TableShape {
    fn from(value: ShapeDto) -> Self {
        match value {
            ShapeDto::Round => Self::Round,
            ShapeDto::Trestle => Self::Trestle,
        }
    }
}

/// Table configuration as edited in the planner UI. `name` and `capacity` are
/// pass-through for other collaborators; only `id` and `shape` feed the shape
/// lookup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableConfigDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub shape: Option<ShapeDto>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// A weights profile as edited in the planner UI.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeightsDto {
    pub must_not_weight: f64,
    pub wants_weight: f64,
    pub adjacent_singles_weight: f64,
    pub same_gender_adj_weight: f64,
    pub alternating_tables_weight: f64,
    pub split_couples_weight: f64,
}

impl From<WeightsDto> for Weights {
    fn from(value: WeightsDto) -> Self {
        Self {
            must_not: value.must_not_weight,
            wants: value.wants_weight,
            adjacent_singles: value.adjacent_singles_weight,
            same_gender_adj: value.same_gender_adj_weight,
            alternating_tables: value.alternating_tables_weight,
            split_couples: value.split_couples_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    InvalidGuestId { raw: String, reason: IdError },
    InvalidTableId { raw: String, reason: IdError },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuestId { raw, reason } => {
                write!(f, "invalid guest id '{raw}': {reason}")
            }
            Self::InvalidTableId { raw, reason } => {
                write!(f, "invalid table id '{raw}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

fn guest_id(raw: String) -> Result<GuestId, ConvertError> {
    GuestId::new(raw.clone()).map_err(|reason| ConvertError::InvalidGuestId { raw, reason })
}

fn table_id(raw: String) -> Result<TableId, ConvertError> {
    TableId::new(raw.clone()).map_err(|reason| ConvertError::InvalidTableId { raw, reason })
}

impl GuestDto {
    pub fn into_guest(self) -> Result<Guest, ConvertError> {
        let mut guest = Guest::new(guest_id(self.id)?, self.name)
            .with_tags(self.tags)
            .with_attributes(GuestAttributes::new(
                self.attributes.side,
                self.attributes.wants_by_name,
                self.attributes.must_not_by_name,
                self.attributes.extra,
            ));
        if let Some(gender) = self.gender {
            guest = guest.with_gender(gender);
        }
        if let Some(status) = self.marital_status {
            guest = guest.with_marital_status(status);
        }
        Ok(guest)
    }
}

impl SeatingPlanResponse {
    pub fn into_plan(self) -> Result<SeatingPlan, ConvertError> {
        let tables = self
            .tables
            .into_iter()
            .map(|table| {
                let seats = table
                    .seats
                    .into_iter()
                    .map(|seat| Ok(SeatAssignment::new(seat.seat_index, guest_id(seat.guest_id)?)))
                    .collect::<Result<Vec<_>, ConvertError>>()?;
                Ok(TableSeating::new(table_id(table.table_id)?, seats))
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;

        let metrics = SeatingMetrics {
            must_not_violations: self.metrics.must_not_violations,
            wants_satisfied: self.metrics.wants_satisfied,
            adjacent_singles: self.metrics.adjacent_singles,
            same_gender_adjacencies: self.metrics.same_gender_adjacencies,
            alternating_tables: self.metrics.alternating_tables,
            split_couples: self.metrics.split_couples,
        };

        Ok(SeatingPlan::new(tables, metrics, self.attempts_made))
    }
}

pub fn guest_directory(guests: Vec<GuestDto>) -> Result<GuestDirectory, ConvertError> {
    guests
        .into_iter()
        .map(GuestDto::into_guest)
        .collect::<Result<GuestDirectory, _>>()
}

pub fn table_shapes(tables: Vec<TableConfigDto>) -> Result<TableShapes, ConvertError> {
    tables
        .into_iter()
        .filter_map(|table| {
            table
                .shape
                .map(|shape| Ok((table_id(table.id)?, TableShape::from(shape))))
        })
        .collect::<Result<TableShapes, _>>()
}
