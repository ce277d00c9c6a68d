// Dashboard service - Summary cards drawn from the other use cases
use crate::application::cargo_service::CargoService;
use crate::application::error::ServiceResult;
use crate::application::live_map_service::LiveMapService;
use crate::application::maintenance_service::MaintenanceService;
use crate::domain::dashboard::DashboardSummary;

#[derive(Clone)]
pub struct DashboardService {
    live_map: LiveMapService,
    cargo: CargoService,
    maintenance: MaintenanceService,
}

impl DashboardService {
    pub fn new(live_map: LiveMapService, cargo: CargoService, maintenance: MaintenanceService) -> Self {
        Self {
            live_map,
            cargo,
            maintenance,
        }
    }

    pub async fn summary(&self) -> ServiceResult<DashboardSummary> {
        let active_buses = self.live_map.snapshot().await.active;
        let pending_cargo = self.cargo.pending_arrivals().await?.len();
        let maintenance_alerts = self.maintenance.summary().await?.needing_attention();
        Ok(DashboardSummary::new(active_buses, pending_cargo, maintenance_alerts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::maintenance::MaintenancePolicy;
    use crate::infrastructure::memory_repository::InMemoryRepository;
    use crate::infrastructure::seed;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_summary_from_seed() {
        let repository = Arc::new(InMemoryRepository::seeded());
        let cargo = CargoService::new(repository.clone());
        let maintenance = MaintenanceService::new(repository, MaintenancePolicy::default());
        let live_map = LiveMapService::new(seed::bus_units());
        let service = DashboardService::new(live_map, cargo.clone(), maintenance);

        let summary = service.summary().await.unwrap();
        assert_eq!(summary, DashboardSummary::new(5, 3, 6));

        cargo.unload("1").await.unwrap();
        assert_eq!(service.summary().await.unwrap().pending_cargo, 2);
    }
}
