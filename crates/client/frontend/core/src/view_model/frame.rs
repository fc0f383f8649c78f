//! Render-ready frame of the standings view.
use overlay_runtime::FetchStatus;
use standings_core::{CarClassId, ClassStanding, RenderRow};

/// Column titles of the standings table.
pub const HEADER: [&str; 7] = ["Pos", "No.", "Driver", "Car", "Prev", "Pts", "+/-"];

/// Freshness of what is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBadge {
    Live,
    Refreshing,
    /// The last poll failed; the table shows older data.
    Stale,
}

impl From<FetchStatus> for StatusBadge {
    fn from(status: FetchStatus) -> Self {
        match status {
            FetchStatus::Idle => Self::Live,
            FetchStatus::Loading => Self::Refreshing,
            FetchStatus::Failed => Self::Stale,
        }
    }
}

impl StatusBadge {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Refreshing => "refreshing",
            Self::Stale => "stale",
        }
    }
}

/// One entry of the class switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassTab {
    pub class_id: CarClassId,
    pub name: String,
    pub selected: bool,
}

/// Summary line under a class table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
    pub class_name: String,
    pub strength_of_field: i32,
    pub track_name: String,
    pub leader_laps: i32,
}

impl Footer {
    pub(crate) fn new(standing: &ClassStanding, track_name: &str) -> Self {
        Self {
            class_name: standing.class_name.clone(),
            strength_of_field: standing.strength_of_field,
            track_name: track_name.to_string(),
            leader_laps: standing.class_leader_laps_complete,
        }
    }

    pub fn sof_label(&self) -> String {
        format!("SOF:{}", self.strength_of_field)
    }

    pub fn laps_label(&self) -> String {
        format!("Laps:{}", self.leader_laps)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandingsBody {
    /// No snapshot has arrived yet.
    Waiting,
    /// A snapshot arrived but has nothing for the selected class.
    NoClass,
    Table { rows: Vec<RenderRow>, footer: Footer },
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandingsView {
    pub status_line: String,
    pub badge: StatusBadge,
    pub classes: Vec<ClassTab>,
    pub body: StandingsBody,
}

/// Text of each [`HEADER`] column for one row.
pub fn row_cells(row: &RenderRow) -> [String; 7] {
    [
        row.predicted_position.to_string(),
        format!("#{}", row.car_number),
        row.driver_name.clone(),
        row.car_names.join(", "),
        row.current_position
            .map(|position| position.to_string())
            .unwrap_or_default(),
        row.predicted_points.to_string(),
        row.change.to_string(),
    ]
}
