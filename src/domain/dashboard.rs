// Dashboard domain model - Summary cards on the landing page
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub active_buses: usize,
    pub pending_cargo: usize,
    pub maintenance_alerts: usize,
}

impl DashboardSummary {
    pub fn new(active_buses: usize, pending_cargo: usize, maintenance_alerts: usize) -> Self {
        Self {
            active_buses,
            pending_cargo,
            maintenance_alerts,
        }
    }
}
