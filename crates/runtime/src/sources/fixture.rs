//! Canned collaborators for offline runs and tests.
use async_trait::async_trait;
use standings_core::{CarClassId, ClassStanding, CustId, PredictedStanding, PredictedStandings};

use crate::api::{ConfigSource, FetchError, PastResultsSource, StandingsSource};
use crate::session::DisplayConfig;

/// Serves the same snapshot on every call.
#[derive(Debug, Clone)]
pub struct FixtureStandingsSource {
    snapshot: PredictedStandings,
}

impl FixtureStandingsSource {
    pub fn new(snapshot: PredictedStandings) -> Self {
        Self { snapshot }
    }

    /// A two-class race with the viewer in the second class.
    pub fn sample() -> Self {
        let gto = ClassStanding {
            class_id: CarClassId(83),
            class_name: "GTO".into(),
            strength_of_field: 2150,
            class_leader_laps_complete: 12,
            items: vec![
                standing(1001, "Ana Costa", "7", 1, Some(2), 1, 42),
                standing(1002, "Ben Ito", "", 2, Some(1), -1, 38),
                standing(1003, "Cleo Marsh", "31", 3, None, 0, 30),
            ],
        };
        let mut eve = standing(2002, "Eve Hart", "11", 2, Some(3), 1, 51);
        eve.is_driving = false;
        let gtp = ClassStanding {
            class_id: CarClassId(84),
            class_name: "GTP".into(),
            strength_of_field: 3420,
            class_leader_laps_complete: 14,
            items: vec![
                standing(2001, "Dan Okafor", "1", 1, Some(1), 0, 60),
                eve,
                standing(2003, "Finn Lowe", "24", 3, Some(2), -1, 44),
            ],
        };

        Self::new(PredictedStandings {
            status_label: "Race".into(),
            track_name: "Road America Full Course".into(),
            count_best_of: 10,
            self_class_id: CarClassId(84),
            class_ids: vec![CarClassId(83), CarClassId(84)],
            classes: [(gto.class_id, gto), (gtp.class_id, gtp)]
                .into_iter()
                .collect(),
        })
    }
}

fn standing(
    cust_id: u64,
    driver_name: &str,
    car_number: &str,
    predicted_position: u32,
    current_position: Option<u32>,
    change: i32,
    predicted_points: i32,
) -> PredictedStanding {
    PredictedStanding {
        cust_id: CustId(cust_id),
        driver_name: driver_name.into(),
        car_number: car_number.into(),
        car_names: vec!["Porsche 963".into()],
        is_driving: true,
        current_position,
        predicted_position,
        current_points: predicted_points - change,
        predicted_points,
        change_since_prior_poll: change,
    }
}

#[async_trait]
impl StandingsSource for FixtureStandingsSource {
    async fn fetch_latest_standings(&self) -> Result<PredictedStandings, FetchError> {
        Ok(self.snapshot.clone())
    }
}

/// Fixed display configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConfigSource(pub DisplayConfig);

#[async_trait]
impl ConfigSource for StaticConfigSource {
    async fn fetch_configuration(&self) -> Result<DisplayConfig, FetchError> {
        Ok(self.0)
    }
}

/// Fixed past-results answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticPastResults(pub bool);

#[async_trait]
impl PastResultsSource for StaticPastResults {
    async fn load_past_results(&self) -> Result<bool, FetchError> {
        Ok(self.0)
    }
}
