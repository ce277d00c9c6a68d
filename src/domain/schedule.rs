// Schedule domain model - Units on the daily fleet schedule
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DutyStatus {
    Active,
    #[serde(rename = "On Break")]
    OnBreak,
    #[serde(rename = "On Leave")]
    OnLeave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetUnit {
    pub id: String,
    pub bus_number: String,
    pub driver: String,
    pub destination: String,
    pub departure_time: String,
    pub status: DutyStatus,
    pub current_location: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleTab {
    #[default]
    Active,
    OnBreak,
    OnLeave,
    All,
}

impl ScheduleTab {
    pub fn includes(&self, unit: &FleetUnit) -> bool {
        match self {
            ScheduleTab::Active => unit.status == DutyStatus::Active,
            ScheduleTab::OnBreak => unit.status == DutyStatus::OnBreak,
            ScheduleTab::OnLeave => unit.status == DutyStatus::OnLeave,
            ScheduleTab::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub active: usize,
    pub on_break: usize,
    pub on_leave: usize,
}

impl TabCounts {
    pub fn from_units(units: &[FleetUnit]) -> Self {
        let count = |status: DutyStatus| units.iter().filter(|u| u.status == status).count();
        Self {
            active: count(DutyStatus::Active),
            on_break: count(DutyStatus::OnBreak),
            on_leave: count(DutyStatus::OnLeave),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTrip {
    #[serde(default)]
    pub bus_number: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default = "default_duty_status")]
    pub status: DutyStatus,
}

fn default_duty_status() -> DutyStatus {
    DutyStatus::Active
}

impl NewTrip {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("bus_number", &self.bus_number),
            ("driver", &self.driver),
            ("destination", &self.destination),
            ("departure_time", &self.departure_time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn into_unit(self, id: String) -> FleetUnit {
        FleetUnit {
            id,
            bus_number: self.bus_number,
            driver: self.driver,
            destination: self.destination,
            departure_time: self.departure_time,
            status: self.status,
            current_location: None,
        }
    }
}
