//! Snapshot contract published by the standings backend.
//!
//! A [`PredictedStandings`] value is one polled view of the race. It is
//! produced wholesale by the backend on every poll and never patched in place;
//! the runtime swaps the whole value when a newer one arrives.
//!
//! Field names on the wire follow the backend's JSON (`snake_case`, classes
//! keyed by their id rendered as a string).
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::ids::{CarClassId, CustId};

/// Reasons a payload cannot be accepted as a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed standings payload")]
    Json(#[from] serde_json::Error),

    #[error("self car class {self_class} is not listed in car_class_ids")]
    SelfClassNotListed { self_class: CarClassId },
}

/// One polled view of the race.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictedStandings {
    /// Free-text backend status, e.g. "Waiting for iRacing".
    #[serde(rename = "status")]
    pub status_label: String,
    pub track_name: String,
    /// Number of recent results counted towards the prediction.
    pub count_best_of: i32,
    /// Class of the viewing driver; [`CarClassId::UNKNOWN`] when not racing.
    #[serde(rename = "self_car_class_id")]
    pub self_class_id: CarClassId,
    /// Every class present this session. The order is the cycling order.
    #[serde(rename = "car_class_ids")]
    pub class_ids: Vec<CarClassId>,
    #[serde(rename = "standings")]
    pub classes: BTreeMap<CarClassId, ClassStanding>,
}

impl PredictedStandings {
    /// Decodes and validates a backend payload.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_slice(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the cross-field invariants of the snapshot.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.self_class_id.is_known() && !self.class_ids.contains(&self.self_class_id) {
            return Err(SnapshotError::SelfClassNotListed {
                self_class: self.self_class_id,
            });
        }
        Ok(())
    }

    /// Looks up the leaderboard of one class.
    pub fn class(&self, class_id: CarClassId) -> Option<&ClassStanding> {
        self.classes.get(&class_id)
    }

    /// True for the initial placeholder before any poll succeeded.
    pub fn is_empty(&self) -> bool {
        self.class_ids.is_empty() && self.classes.is_empty()
    }
}

/// Leaderboard of a single car class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassStanding {
    #[serde(rename = "car_class_id")]
    pub class_id: CarClassId,
    #[serde(rename = "car_class_name")]
    pub class_name: String,
    #[serde(rename = "sof_by_car_class")]
    pub strength_of_field: i32,
    pub class_leader_laps_complete: i32,
    /// Ordered by predicted finishing position, best first.
    pub items: Vec<PredictedStanding>,
}

/// One competitor as delivered by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedStanding {
    pub cust_id: CustId,
    #[serde(default)]
    pub driver_name: String,
    /// Empty when the driver has no car number this session.
    #[serde(default)]
    pub car_number: String,
    #[serde(default)]
    pub car_names: Vec<String>,
    /// False when the car is listed but its driver left the session.
    #[serde(rename = "driving", default)]
    pub is_driving: bool,
    #[serde(
        default,
        deserialize_with = "position_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_position: Option<u32>,
    pub predicted_position: u32,
    #[serde(default)]
    pub current_points: i32,
    #[serde(default)]
    pub predicted_points: i32,
    /// Rank change since the previous poll, computed upstream.
    /// Positive means the competitor gained places.
    #[serde(rename = "change", default)]
    pub change_since_prior_poll: i32,
}

/// The backend writes `0` for "no position yet" as well as omitting the field.
fn position_or_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u32>::deserialize(deserializer)?;
    Ok(raw.filter(|position| *position > 0))
}
