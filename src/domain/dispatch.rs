// Dispatch domain model - Trip status table and the driver/bus assignment board
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchStatus {
    Preparing,
    Departed,
    #[serde(rename = "In Transit")]
    InTransit,
    Arrived,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetDispatch {
    pub id: String,
    pub bus_number: String,
    pub driver_name: String,
    pub destination: String,
    pub status: DispatchStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestStatus {
    Available,
    #[serde(rename = "On Break")]
    OnBreak,
    #[serde(rename = "On Duty")]
    OnDuty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub rest_status: RestStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusAvailability {
    Available,
    #[serde(rename = "In Use")]
    InUse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusResource {
    pub id: String,
    pub bus_number: String,
    pub capacity: u32,
    pub status: BusAvailability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub driver_id: Option<String>,
    pub bus_id: Option<String>,
    pub departure_time: String,
}

impl Trip {
    pub fn unassigned(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            driver_id: None,
            bus_id: None,
            departure_time: String::new(),
        }
    }

    /// A trip is ready once it has a driver, a bus and a departure time
    pub fn is_complete(&self) -> bool {
        self.driver_id.is_some() && self.bus_id.is_some() && !self.departure_time.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripPatch {
    pub driver_id: Option<String>,
    pub bus_id: Option<String>,
    pub departure_time: Option<String>,
}

impl TripPatch {
    fn apply(self, trip: &mut Trip) {
        // An empty string clears the assignment
        if let Some(driver_id) = self.driver_id {
            trip.driver_id = Some(driver_id).filter(|id| !id.is_empty());
        }
        if let Some(bus_id) = self.bus_id {
            trip.bus_id = Some(bus_id).filter(|id| !id.is_empty());
        }
        if let Some(departure_time) = self.departure_time {
            trip.departure_time = departure_time;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteColumn {
    pub id: String,
    pub route: String,
    pub trips: Vec<Trip>,
}

impl RouteColumn {
    pub fn assigned_count(&self) -> usize {
        self.trips.iter().filter(|t| t.is_complete()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchBoard {
    pub drivers: Vec<Driver>,
    pub buses: Vec<BusResource>,
    pub routes: Vec<RouteColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    UnknownRoute(String),
    UnknownTrip(String),
    UnknownDriver(String),
    UnknownBus(String),
}

impl DispatchBoard {
    pub fn driver_name(&self, driver_id: &str) -> Option<&str> {
        self.drivers
            .iter()
            .find(|d| d.id == driver_id)
            .map(|d| d.name.as_str())
    }

    pub fn bus_number(&self, bus_id: &str) -> Option<&str> {
        self.buses
            .iter()
            .find(|b| b.id == bus_id)
            .map(|b| b.bus_number.as_str())
    }

    fn route_mut(&mut self, route_id: &str) -> Result<&mut RouteColumn, BoardError> {
        self.routes
            .iter_mut()
            .find(|r| r.id == route_id)
            .ok_or_else(|| BoardError::UnknownRoute(route_id.to_string()))
    }

    pub fn add_trip(&mut self, route_id: &str, trip_id: String) -> Result<Trip, BoardError> {
        let route = self.route_mut(route_id)?;
        let trip = Trip::unassigned(trip_id);
        route.trips.push(trip.clone());
        Ok(trip)
    }

    pub fn update_trip(
        &mut self,
        route_id: &str,
        trip_id: &str,
        patch: TripPatch,
    ) -> Result<Trip, BoardError> {
        if let Some(driver_id) = patch.driver_id.as_deref().filter(|id| !id.is_empty()) {
            if self.driver_name(driver_id).is_none() {
                return Err(BoardError::UnknownDriver(driver_id.to_string()));
            }
        }
        if let Some(bus_id) = patch.bus_id.as_deref().filter(|id| !id.is_empty()) {
            if self.bus_number(bus_id).is_none() {
                return Err(BoardError::UnknownBus(bus_id.to_string()));
            }
        }

        let route = self.route_mut(route_id)?;
        let trip = route
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or_else(|| BoardError::UnknownTrip(trip_id.to_string()))?;
        patch.apply(trip);
        Ok(trip.clone())
    }

    pub fn remove_trip(&mut self, route_id: &str, trip_id: &str) -> Result<Trip, BoardError> {
        let route = self.route_mut(route_id)?;
        let idx = route
            .trips
            .iter()
            .position(|t| t.id == trip_id)
            .ok_or_else(|| BoardError::UnknownTrip(trip_id.to_string()))?;
        Ok(route.trips.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> DispatchBoard {
        DispatchBoard {
            drivers: vec![Driver {
                id: "d5".to_string(),
                name: "Carlos Mendoza".to_string(),
                rest_status: RestStatus::OnDuty,
            }],
            buses: vec![BusResource {
                id: "b2".to_string(),
                bus_number: "PB-008".to_string(),
                capacity: 45,
                status: BusAvailability::InUse,
            }],
            routes: vec![RouteColumn {
                id: "r1".to_string(),
                route: "Cubao to Baguio".to_string(),
                trips: vec![Trip::unassigned("t2")],
            }],
        }
    }

    #[test]
    fn test_trip_completion_needs_all_three() {
        let mut board = board();
        let patch = TripPatch {
            driver_id: Some("d5".to_string()),
            bus_id: Some("b2".to_string()),
            ..Default::default()
        };
        let trip = board.update_trip("r1", "t2", patch).unwrap();
        assert!(!trip.is_complete());
        assert_eq!(board.routes[0].assigned_count(), 0);

        let patch = TripPatch {
            departure_time: Some("06:00".to_string()),
            ..Default::default()
        };
        let trip = board.update_trip("r1", "t2", patch).unwrap();
        assert!(trip.is_complete());
        assert_eq!(board.routes[0].assigned_count(), 1);
    }

    #[test]
    fn test_empty_id_clears_assignment() {
        let mut board = board();
        let assign = TripPatch {
            driver_id: Some("d5".to_string()),
            ..Default::default()
        };
        board.update_trip("r1", "t2", assign).unwrap();
        let clear = TripPatch {
            driver_id: Some(String::new()),
            ..Default::default()
        };
        let trip = board.update_trip("r1", "t2", clear).unwrap();
        assert_eq!(trip.driver_id, None);
    }

    #[test]
    fn test_unknown_references_are_rejected() {
        let mut board = board();
        let patch = TripPatch {
            bus_id: Some("b99".to_string()),
            ..Default::default()
        };
        assert_eq!(
            board.update_trip("r1", "t2", patch),
            Err(BoardError::UnknownBus("b99".to_string()))
        );
        assert_eq!(
            board.add_trip("r9", "t9".to_string()),
            Err(BoardError::UnknownRoute("r9".to_string()))
        );
    }

    #[test]
    fn test_add_and_remove_trip() {
        let mut board = board();
        board.add_trip("r1", "t7".to_string()).unwrap();
        assert_eq!(board.routes[0].trips.len(), 2);

        let removed = board.remove_trip("r1", "t2").unwrap();
        assert_eq!(removed.id, "t2");
        assert_eq!(
            board.remove_trip("r1", "t2"),
            Err(BoardError::UnknownTrip("t2".to_string()))
        );
        assert_eq!(board.routes[0].trips.len(), 1);
    }

    #[test]
    fn test_lookups() {
        let board = board();
        assert_eq!(board.driver_name("d5"), Some("Carlos Mendoza"));
        assert_eq!(board.bus_number("b2"), Some("PB-008"));
        assert_eq!(board.bus_number("b1"), None);
    }
}
