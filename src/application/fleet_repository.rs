// Repository trait for fleet back-office data access
use crate::application::error::ServiceError;
use crate::domain::cargo::ArrivedCargo;
use crate::domain::dispatch::{BoardError, DispatchBoard, DispatchStatus, FleetDispatch, Trip};
use crate::domain::intercom::{ActiveTrip, Message};
use crate::domain::maintenance::MaintenanceAlert;
use crate::domain::news::NewsPost;
use crate::domain::schedule::{DutyStatus, FleetUnit};
use crate::domain::waybill::{Waybill, WaybillDraft};
use async_trait::async_trait;

/// One change to the dispatch board, applied under the repository's write lock
pub type BoardEdit = Box<dyn FnOnce(&mut DispatchBoard) -> Result<Trip, BoardError> + Send>;

/// Derive the next state of an alert from its current one
pub type AlertEdit = Box<dyn FnOnce(&MaintenanceAlert) -> MaintenanceAlert + Send>;

pub type DraftEdit = Box<dyn FnOnce(&mut WaybillDraft) + Send>;

/// Build a waybill from a draft and the waybills already issued
pub type WaybillIssue =
    Box<dyn FnOnce(&WaybillDraft, &[Waybill]) -> Result<Waybill, ServiceError> + Send>;

#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// Maintenance alerts in display order
    async fn list_maintenance_alerts(&self) -> anyhow::Result<Vec<MaintenanceAlert>>;

    /// Replace a bus's alert with `edit(current)`; returns the previous and new alert
    async fn edit_maintenance_alert(
        &self,
        bus_number: &str,
        edit: AlertEdit,
    ) -> anyhow::Result<Option<(MaintenanceAlert, MaintenanceAlert)>>;

    async fn list_dispatches(&self) -> anyhow::Result<Vec<FleetDispatch>>;

    async fn update_dispatch_status(
        &self,
        id: &str,
        status: DispatchStatus,
    ) -> anyhow::Result<Option<FleetDispatch>>;

    async fn load_dispatch_board(&self) -> anyhow::Result<DispatchBoard>;

    async fn edit_dispatch_board(&self, edit: BoardEdit) -> anyhow::Result<Result<Trip, BoardError>>;

    async fn list_fleet_units(&self) -> anyhow::Result<Vec<FleetUnit>>;

    async fn insert_fleet_unit(&self, unit: FleetUnit) -> anyhow::Result<()>;

    async fn update_fleet_unit_status(
        &self,
        id: &str,
        status: DutyStatus,
    ) -> anyhow::Result<Option<FleetUnit>>;

    async fn find_draft(&self, id: &str) -> anyhow::Result<Option<WaybillDraft>>;

    /// Insert or replace a waybill draft
    async fn save_draft(&self, draft: WaybillDraft) -> anyhow::Result<()>;

    async fn edit_draft(&self, id: &str, edit: DraftEdit) -> anyhow::Result<Option<WaybillDraft>>;

    /// Turn a draft into a waybill; the draft is removed only if `issue` succeeds
    async fn submit_draft(
        &self,
        id: &str,
        issue: WaybillIssue,
    ) -> anyhow::Result<Option<Result<Waybill, ServiceError>>>;

    async fn remove_draft(&self, id: &str) -> anyhow::Result<Option<WaybillDraft>>;

    async fn list_waybills(&self) -> anyhow::Result<Vec<Waybill>>;

    async fn list_arrivals(&self) -> anyhow::Result<Vec<ArrivedCargo>>;

    async fn remove_arrival(&self, id: &str) -> anyhow::Result<Option<ArrivedCargo>>;

    async fn list_active_trips(&self) -> anyhow::Result<Vec<ActiveTrip>>;

    async fn find_active_trip(&self, id: &str) -> anyhow::Result<Option<ActiveTrip>>;

    async fn list_messages(&self, trip_id: &str) -> anyhow::Result<Vec<Message>>;

    async fn append_message(&self, trip_id: &str, message: Message) -> anyhow::Result<()>;

    /// News posts, newest first
    async fn list_news(&self) -> anyhow::Result<Vec<NewsPost>>;

    async fn insert_news(&self, post: NewsPost) -> anyhow::Result<()>;

    async fn remove_news(&self, id: &str) -> anyhow::Result<Option<NewsPost>>;
}
