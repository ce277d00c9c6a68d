// Application state for HTTP handlers
use crate::application::cargo_service::CargoService;
use crate::application::dashboard_service::DashboardService;
use crate::application::dispatch_service::DispatchService;
use crate::application::fleet_repository::FleetRepository;
use crate::application::intercom_service::IntercomService;
use crate::application::live_map_service::LiveMapService;
use crate::application::maintenance_service::MaintenanceService;
use crate::application::news_service::NewsService;
use crate::application::report_service::ReportService;
use crate::application::session_service::SessionService;
use crate::application::waybill_service::WaybillService;
use crate::infrastructure::config::FleetConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub dashboard_service: DashboardService,
    pub dispatch_service: DispatchService,
    pub maintenance_service: MaintenanceService,
    pub waybill_service: WaybillService,
    pub cargo_service: CargoService,
    pub intercom_service: IntercomService,
    pub news_service: NewsService,
    pub report_service: ReportService,
    pub live_map_service: LiveMapService,
}

impl AppState {
    /// Wire every service to one repository and one live map
    pub fn new(
        repository: Arc<dyn FleetRepository>,
        live_map_service: LiveMapService,
        config: &FleetConfig,
    ) -> Self {
        let maintenance_service =
            MaintenanceService::new(repository.clone(), config.maintenance_policy());
        let cargo_service = CargoService::new(repository.clone());
        let dashboard_service = DashboardService::new(
            live_map_service.clone(),
            cargo_service.clone(),
            maintenance_service.clone(),
        );

        Self {
            session_service: SessionService::new(),
            dashboard_service,
            dispatch_service: DispatchService::new(repository.clone()),
            maintenance_service,
            waybill_service: WaybillService::new(repository.clone(), config.pricing_policy()),
            cargo_service,
            intercom_service: IntercomService::new(repository.clone()),
            news_service: NewsService::new(repository),
            report_service: ReportService::new(),
            live_map_service,
        }
    }

    #[cfg(test)]
    pub fn seeded() -> Arc<Self> {
        use crate::infrastructure::memory_repository::InMemoryRepository;
        use crate::infrastructure::seed;

        Arc::new(Self::new(
            Arc::new(InMemoryRepository::seeded()),
            LiveMapService::new(seed::bus_units()),
            &FleetConfig::default(),
        ))
    }
}
