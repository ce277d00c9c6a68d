// Dispatch service - Trip status table, assignment board and daily schedule
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::fleet_repository::FleetRepository;
use crate::application::ids::prefixed_id;
use crate::domain::dispatch::{
    BoardError, DispatchBoard, DispatchStatus, FleetDispatch, RouteColumn, Trip, TripPatch,
};
use crate::domain::schedule::{DutyStatus, FleetUnit, NewTrip, ScheduleTab, TabCounts};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct RouteProgress {
    pub route_id: String,
    pub route: String,
    pub assigned: usize,
    pub total: usize,
}

impl RouteProgress {
    fn of(route: &RouteColumn) -> Self {
        Self {
            route_id: route.id.clone(),
            route: route.route.clone(),
            assigned: route.assigned_count(),
            total: route.trips.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    #[serde(flatten)]
    pub board: DispatchBoard,
    pub progress: Vec<RouteProgress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub counts: TabCounts,
    pub units: Vec<FleetUnit>,
}

impl From<BoardError> for ServiceError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::UnknownRoute(id) => ServiceError::not_found("route", id),
            BoardError::UnknownTrip(id) => ServiceError::not_found("trip", id),
            BoardError::UnknownDriver(id) => ServiceError::Validation(format!("Unknown driver {}", id)),
            BoardError::UnknownBus(id) => ServiceError::Validation(format!("Unknown bus {}", id)),
        }
    }
}

#[derive(Clone)]
pub struct DispatchService {
    repository: Arc<dyn FleetRepository>,
}

impl DispatchService {
    pub fn new(repository: Arc<dyn FleetRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_dispatches(&self) -> ServiceResult<Vec<FleetDispatch>> {
        Ok(self.repository.list_dispatches().await?)
    }

    pub async fn set_dispatch_status(&self, id: &str, status: DispatchStatus) -> ServiceResult<FleetDispatch> {
        let dispatch = self
            .repository
            .update_dispatch_status(id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("dispatch", id))?;
        tracing::info!("Dispatch {} ({}) is now {:?}", dispatch.id, dispatch.bus_number, status);
        Ok(dispatch)
    }

    pub async fn board(&self) -> ServiceResult<BoardView> {
        let board = self.repository.load_dispatch_board().await?;
        Ok(Self::view(board))
    }

    pub async fn add_trip(&self, route_id: &str) -> ServiceResult<Trip> {
        let route = route_id.to_string();
        let trip_id = prefixed_id("t");
        let trip = self
            .repository
            .edit_dispatch_board(Box::new(move |board: &mut DispatchBoard| {
                board.add_trip(&route, trip_id)
            }))
            .await??;
        tracing::info!("Trip {} added to route {}", trip.id, route_id);
        Ok(trip)
    }

    pub async fn update_trip(&self, route_id: &str, trip_id: &str, patch: TripPatch) -> ServiceResult<Trip> {
        let (route, trip_key) = (route_id.to_string(), trip_id.to_string());
        let trip = self
            .repository
            .edit_dispatch_board(Box::new(move |board: &mut DispatchBoard| {
                board.update_trip(&route, &trip_key, patch)
            }))
            .await??;
        tracing::debug!("Trip {} on route {} updated", trip_id, route_id);
        Ok(trip)
    }

    pub async fn remove_trip(&self, route_id: &str, trip_id: &str) -> ServiceResult<Trip> {
        let (route, trip_key) = (route_id.to_string(), trip_id.to_string());
        let trip = self
            .repository
            .edit_dispatch_board(Box::new(move |board: &mut DispatchBoard| {
                board.remove_trip(&route, &trip_key)
            }))
            .await??;
        tracing::info!("Trip {} removed from route {}", trip_id, route_id);
        Ok(trip)
    }

    pub async fn schedule(&self, tab: ScheduleTab) -> ServiceResult<ScheduleView> {
        let units = self.repository.list_fleet_units().await?;
        let counts = TabCounts::from_units(&units);
        let units = units.into_iter().filter(|u| tab.includes(u)).collect();
        Ok(ScheduleView { counts, units })
    }

    pub async fn schedule_trip(&self, trip: NewTrip) -> ServiceResult<FleetUnit> {
        let missing = trip.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }
        let unit = trip.into_unit(prefixed_id("u"));
        self.repository.insert_fleet_unit(unit.clone()).await?;
        tracing::info!("Scheduled {} with {} on {}", unit.bus_number, unit.driver, unit.destination);
        Ok(unit)
    }

    pub async fn set_duty_status(&self, id: &str, status: DutyStatus) -> ServiceResult<FleetUnit> {
        self.repository
            .update_fleet_unit_status(id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("unit", id))
    }

    fn view(board: DispatchBoard) -> BoardView {
        let progress = board.routes.iter().map(RouteProgress::of).collect();
        BoardView { board, progress }
    }
}
