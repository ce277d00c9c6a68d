// In-memory repository implementation
use crate::application::error::ServiceError;
use crate::application::fleet_repository::{
    AlertEdit, BoardEdit, DraftEdit, FleetRepository, WaybillIssue,
};
use crate::domain::cargo::ArrivedCargo;
use crate::domain::dispatch::{BoardError, DispatchBoard, DispatchStatus, FleetDispatch, Trip};
use crate::domain::intercom::{ActiveTrip, Message};
use crate::domain::maintenance::MaintenanceAlert;
use crate::domain::news::NewsPost;
use crate::domain::schedule::{DutyStatus, FleetUnit};
use crate::domain::waybill::{Waybill, WaybillDraft};
use crate::infrastructure::seed;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Everything the back office holds; lost on restart
#[derive(Debug, Clone, Default)]
pub struct FleetData {
    pub maintenance_alerts: Vec<MaintenanceAlert>,
    pub dispatches: Vec<FleetDispatch>,
    pub board: Option<DispatchBoard>,
    pub fleet_units: Vec<FleetUnit>,
    pub drafts: HashMap<String, WaybillDraft>,
    pub waybills: Vec<Waybill>,
    pub arrivals: Vec<ArrivedCargo>,
    pub active_trips: Vec<ActiveTrip>,
    pub messages: HashMap<String, Vec<Message>>,
    pub news: Vec<NewsPost>,
}

impl FleetData {
    pub fn seeded() -> Self {
        Self {
            maintenance_alerts: seed::maintenance_alerts(),
            dispatches: seed::dispatches(),
            board: Some(seed::dispatch_board()),
            fleet_units: seed::fleet_units(),
            drafts: HashMap::new(),
            waybills: Vec::new(),
            arrivals: seed::arrived_cargo(),
            active_trips: seed::active_trips(),
            messages: seed::message_threads(),
            news: seed::news_posts(),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    data: RwLock<FleetData>,
}

impl InMemoryRepository {
    pub fn new(data: FleetData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn seeded() -> Self {
        Self::new(FleetData::seeded())
    }
}

#[async_trait]
impl FleetRepository for InMemoryRepository {
    async fn list_maintenance_alerts(&self) -> Result<Vec<MaintenanceAlert>> {
        Ok(self.data.read().await.maintenance_alerts.clone())
    }

    async fn edit_maintenance_alert(
        &self,
        bus_number: &str,
        edit: AlertEdit,
    ) -> Result<Option<(MaintenanceAlert, MaintenanceAlert)>> {
        let mut data = self.data.write().await;
        let Some(idx) = data
            .maintenance_alerts
            .iter()
            .position(|a| a.bus_number == bus_number)
        else {
            return Ok(None);
        };
        let previous = data.maintenance_alerts[idx].clone();
        let updated = edit(&previous);
        data.maintenance_alerts[idx] = updated.clone();
        Ok(Some((previous, updated)))
    }

    async fn list_dispatches(&self) -> Result<Vec<FleetDispatch>> {
        Ok(self.data.read().await.dispatches.clone())
    }

    async fn update_dispatch_status(&self, id: &str, status: DispatchStatus) -> Result<Option<FleetDispatch>> {
        let mut data = self.data.write().await;
        Ok(data.dispatches.iter_mut().find(|d| d.id == id).map(|dispatch| {
            dispatch.status = status;
            dispatch.clone()
        }))
    }

    async fn load_dispatch_board(&self) -> Result<DispatchBoard> {
        self.data
            .read()
            .await
            .board
            .clone()
            .ok_or_else(|| anyhow::anyhow!("dispatch board has not been seeded"))
    }

    async fn edit_dispatch_board(&self, edit: BoardEdit) -> Result<std::result::Result<Trip, BoardError>> {
        let mut data = self.data.write().await;
        let board = data
            .board
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("dispatch board has not been seeded"))?;
        Ok(edit(board))
    }

    async fn list_fleet_units(&self) -> Result<Vec<FleetUnit>> {
        Ok(self.data.read().await.fleet_units.clone())
    }

    async fn insert_fleet_unit(&self, unit: FleetUnit) -> Result<()> {
        self.data.write().await.fleet_units.push(unit);
        Ok(())
    }

    async fn update_fleet_unit_status(&self, id: &str, status: DutyStatus) -> Result<Option<FleetUnit>> {
        let mut data = self.data.write().await;
        Ok(data.fleet_units.iter_mut().find(|u| u.id == id).map(|unit| {
            unit.status = status;
            unit.clone()
        }))
    }

    async fn find_draft(&self, id: &str) -> Result<Option<WaybillDraft>> {
        Ok(self.data.read().await.drafts.get(id).cloned())
    }

    async fn save_draft(&self, draft: WaybillDraft) -> Result<()> {
        self.data.write().await.drafts.insert(draft.id.clone(), draft);
        Ok(())
    }

    async fn edit_draft(&self, id: &str, edit: DraftEdit) -> Result<Option<WaybillDraft>> {
        let mut data = self.data.write().await;
        Ok(data.drafts.get_mut(id).map(|draft| {
            edit(draft);
            draft.clone()
        }))
    }

    async fn submit_draft(
        &self,
        id: &str,
        issue: WaybillIssue,
    ) -> Result<Option<std::result::Result<Waybill, ServiceError>>> {
        let mut data = self.data.write().await;
        let data = &mut *data;
        let Some(draft) = data.drafts.get(id) else {
            return Ok(None);
        };
        let outcome = issue(draft, &data.waybills);
        if let Ok(waybill) = &outcome {
            data.waybills.push(waybill.clone());
            data.drafts.remove(id);
        }
        Ok(Some(outcome))
    }

    async fn remove_draft(&self, id: &str) -> Result<Option<WaybillDraft>> {
        Ok(self.data.write().await.drafts.remove(id))
    }

    async fn list_waybills(&self) -> Result<Vec<Waybill>> {
        Ok(self.data.read().await.waybills.clone())
    }

    async fn list_arrivals(&self) -> Result<Vec<ArrivedCargo>> {
        Ok(self.data.read().await.arrivals.clone())
    }

    async fn remove_arrival(&self, id: &str) -> Result<Option<ArrivedCargo>> {
        let mut data = self.data.write().await;
        let idx = data.arrivals.iter().position(|c| c.id == id);
        Ok(idx.map(|idx| data.arrivals.remove(idx)))
    }

    async fn list_active_trips(&self) -> Result<Vec<ActiveTrip>> {
        Ok(self.data.read().await.active_trips.clone())
    }

    async fn find_active_trip(&self, id: &str) -> Result<Option<ActiveTrip>> {
        let data = self.data.read().await;
        Ok(data.active_trips.iter().find(|t| t.id == id).cloned())
    }

    async fn list_messages(&self, trip_id: &str) -> Result<Vec<Message>> {
        let data = self.data.read().await;
        Ok(data.messages.get(trip_id).cloned().unwrap_or_default())
    }

    async fn append_message(&self, trip_id: &str, message: Message) -> Result<()> {
        self.data
            .write()
            .await
            .messages
            .entry(trip_id.to_string())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn list_news(&self) -> Result<Vec<NewsPost>> {
        Ok(self.data.read().await.news.clone())
    }

    async fn insert_news(&self, post: NewsPost) -> Result<()> {
        self.data.write().await.news.insert(0, post);
        Ok(())
    }

    async fn remove_news(&self, id: &str) -> Result<Option<NewsPost>> {
        let mut data = self.data.write().await;
        let idx = data.news.iter().position(|p| p.id == id);
        Ok(idx.map(|idx| data.news.remove(idx)))
    }
}
