//! Reconciliation of competitor entries into renderable rows.
//!
//! [`build_rows`] never re-orders: the backend already ranks competitors by
//! predicted position, so the reconciler only truncates and derives the
//! per-row presentation facts (rank-change indicator, car number, emphasis).
use std::fmt;

use crate::ids::{CarClassId, CustId};
use crate::snapshot::PredictedStanding;

const UNASSIGNED_MARKER: &str = "---";

/// Identity of a row across frames.
///
/// Rankings reorder between polls; a renderer keyed on this value can move rows
/// instead of rebuilding them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub cust_id: CustId,
    pub class_id: CarClassId,
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.cust_id, self.class_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

/// Rank movement since the previous poll, split into direction and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChangeIndicator {
    pub direction: ChangeDirection,
    pub magnitude: u32,
}

impl ChangeIndicator {
    pub fn from_change(change: i32) -> Self {
        let direction = match change {
            c if c > 0 => ChangeDirection::Up,
            c if c < 0 => ChangeDirection::Down,
            _ => ChangeDirection::Flat,
        };

        Self {
            direction,
            magnitude: change.unsigned_abs(),
        }
    }
}

impl fmt::Display for ChangeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            ChangeDirection::Up => write!(f, "^{}", self.magnitude),
            ChangeDirection::Down => write!(f, "v{}", self.magnitude),
            ChangeDirection::Flat => f.write_str(UNASSIGNED_MARKER),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CarNumber {
    Assigned(String),
    Unassigned,
}

impl CarNumber {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Unassigned
        } else {
            Self::Assigned(raw.to_string())
        }
    }
}

impl fmt::Display for CarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(number) => f.write_str(number),
            Self::Unassigned => f.write_str(UNASSIGNED_MARKER),
        }
    }
}

/// Visual weight of a row. Absent drivers are rendered dimmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowEmphasis {
    Normal,
    Absent,
}

/// A competitor ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRow {
    pub key: RowKey,
    pub predicted_position: u32,
    pub current_position: Option<u32>,
    pub car_number: CarNumber,
    pub driver_name: String,
    pub car_names: Vec<String>,
    pub predicted_points: i32,
    pub change: ChangeIndicator,
    pub emphasis: RowEmphasis,
}

impl RenderRow {
    pub fn from_standing(class_id: CarClassId, item: &PredictedStanding) -> Self {
        Self {
            key: RowKey {
                cust_id: item.cust_id,
                class_id,
            },
            predicted_position: item.predicted_position,
            current_position: item.current_position,
            car_number: CarNumber::from_raw(&item.car_number),
            driver_name: item.driver_name.clone(),
            car_names: item.car_names.clone(),
            predicted_points: item.predicted_points,
            change: ChangeIndicator::from_change(item.change_since_prior_poll),
            emphasis: if item.is_driving {
                RowEmphasis::Normal
            } else {
                RowEmphasis::Absent
            },
        }
    }
}

/// Keeps the first `top_n` competitors of a class and reconciles them.
///
/// `top_n <= 0` yields no rows; a `top_n` past the end keeps everything.
pub fn build_rows(class_id: CarClassId, items: &[PredictedStanding], top_n: i32) -> Vec<RenderRow> {
    let keep = usize::try_from(top_n).unwrap_or(0);

    items
        .iter()
        .take(keep)
        .map(|item| RenderRow::from_standing(class_id, item))
        .collect()
}
