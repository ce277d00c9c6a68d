// Maintenance service - Mileage verification and service status tracking
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::fleet_repository::{AlertEdit, FleetRepository};
use crate::domain::maintenance::{
    MaintenanceAlert, MaintenancePolicy, MaintenanceSummary, ServiceProgress,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceBoard {
    pub summary: MaintenanceSummary,
    pub alerts: Vec<MaintenanceAlert>,
}

/// Result of logging distance against a bus
#[derive(Debug, Clone, Serialize)]
pub struct MileageUpdate {
    pub previous_mileage: i64,
    pub added_km: i64,
    pub alert: MaintenanceAlert,
}

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Arc<dyn FleetRepository>,
    policy: MaintenancePolicy,
}

impl MaintenanceService {
    pub fn new(repository: Arc<dyn FleetRepository>, policy: MaintenancePolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn board(&self) -> ServiceResult<MaintenanceBoard> {
        let alerts = self.repository.list_maintenance_alerts().await?;
        Ok(MaintenanceBoard {
            summary: MaintenanceSummary::from_alerts(&alerts),
            alerts,
        })
    }

    pub async fn summary(&self) -> ServiceResult<MaintenanceSummary> {
        let alerts = self.repository.list_maintenance_alerts().await?;
        Ok(MaintenanceSummary::from_alerts(&alerts))
    }

    pub async fn progress(&self) -> ServiceResult<Vec<ServiceProgress>> {
        let alerts = self.repository.list_maintenance_alerts().await?;
        Ok(alerts.iter().map(MaintenanceAlert::progress).collect())
    }

    /// Log today's QR-scan distance for a bus
    pub async fn verify_mileage(&self, bus_number: &str) -> ServiceResult<MileageUpdate> {
        let policy = self.policy;
        self.edit(
            bus_number,
            Box::new(move |alert: &MaintenanceAlert| {
                alert.with_distance(alert.auto_calculated_daily.unwrap_or(0), &policy)
            }),
        )
        .await
    }

    pub async fn log_distance(&self, bus_number: &str, daily_distance: i64) -> ServiceResult<MileageUpdate> {
        let policy = self.policy;
        self.edit(
            bus_number,
            Box::new(move |alert: &MaintenanceAlert| alert.with_distance(daily_distance, &policy)),
        )
        .await
    }

    /// Replace the odometer with a reading taken from the bus
    pub async fn encode_mileage(&self, bus_number: &str, mileage: i64) -> ServiceResult<MileageUpdate> {
        if mileage < 0 {
            return Err(ServiceError::Validation(format!(
                "Mileage must not be negative, got {}",
                mileage
            )));
        }
        let policy = self.policy;
        self.edit(
            bus_number,
            Box::new(move |alert: &MaintenanceAlert| alert.with_mileage(mileage, &policy)),
        )
        .await
    }

    async fn edit(&self, bus_number: &str, edit: AlertEdit) -> ServiceResult<MileageUpdate> {
        let (previous, alert) = self
            .repository
            .edit_maintenance_alert(bus_number, edit)
            .await?
            .ok_or_else(|| ServiceError::not_found("bus", bus_number))?;

        tracing::info!(
            "Mileage logged for {}: {} -> {} km ({:?})",
            alert.bus_number,
            previous.current_mileage,
            alert.current_mileage,
            alert.status
        );
        Ok(MileageUpdate {
            previous_mileage: previous.current_mileage,
            added_km: alert.current_mileage - previous.current_mileage,
            alert,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::maintenance::MaintenanceStatus;
    use crate::infrastructure::memory_repository::InMemoryRepository;

    fn service() -> MaintenanceService {
        MaintenanceService::new(
            Arc::new(InMemoryRepository::seeded()),
            MaintenancePolicy::default(),
        )
    }

    #[tokio::test]
    async fn test_verify_adds_auto_calculated_distance() {
        let service = service();
        let update = service.verify_mileage("PB-012").await.unwrap();
        assert_eq!(update.previous_mileage, 29_800);
        assert_eq!(update.added_km, 142);
        assert_eq!(update.alert.current_mileage, 29_942);
        assert_eq!(update.alert.status, MaintenanceStatus::DueSoon);

        let board = service.board().await.unwrap();
        let stored = board.alerts.iter().find(|a| a.bus_number == "PB-012").unwrap();
        assert_eq!(stored.current_mileage, 29_942);
    }

    #[tokio::test]
    async fn test_log_distance_crosses_threshold() {
        let service = service();
        let update = service.log_distance("PB-012", 300).await.unwrap();
        assert_eq!(update.alert.current_mileage, 30_100);
        assert_eq!(update.alert.status, MaintenanceStatus::Overdue);

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.overdue, 3);
    }

    #[tokio::test]
    async fn test_unknown_bus() {
        let service = service();
        let err = service.verify_mileage("PB-999").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { kind: "bus", .. }));
    }

    #[tokio::test]
    async fn test_encode_mileage_reclassifies() {
        let service = service();
        let update = service.encode_mileage("PB-008", 12_000).await.unwrap();
        assert_eq!(update.previous_mileage, 30_500);
        assert_eq!(update.alert.status, MaintenanceStatus::OnSchedule);

        let err = service.encode_mileage("PB-008", -1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_seeded_summary() {
        let summary = service().summary().await.unwrap();
        assert_eq!(summary.overdue, 2);
        assert_eq!(summary.due_soon, 4);
        assert_eq!(summary.on_schedule, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_distance_logs_all_count() {
        let service = service();
        let handles: Vec<_> = (0..200)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.log_distance("PB-042", 10).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let board = service.board().await.unwrap();
        let stored = board.alerts.iter().find(|a| a.bus_number == "PB-042").unwrap();
        assert_eq!(stored.current_mileage, 18_500 + 200 * 10);
    }
}
