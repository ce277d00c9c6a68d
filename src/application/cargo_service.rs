// Cargo service - Handoff verification for arrived consignments
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::fleet_repository::FleetRepository;
use crate::domain::cargo::ArrivedCargo;
use std::sync::Arc;

#[derive(Clone)]
pub struct CargoService {
    repository: Arc<dyn FleetRepository>,
}

impl CargoService {
    pub fn new(repository: Arc<dyn FleetRepository>) -> Self {
        Self { repository }
    }

    pub async fn pending_arrivals(&self) -> ServiceResult<Vec<ArrivedCargo>> {
        Ok(self.repository.list_arrivals().await?)
    }

    /// Mark arrived cargo as received; it leaves the pending list
    pub async fn unload(&self, id: &str) -> ServiceResult<ArrivedCargo> {
        let cargo = self
            .repository
            .remove_arrival(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("arrival", id))?;
        tracing::info!("{}", cargo.receipt_note());
        Ok(cargo)
    }
}
