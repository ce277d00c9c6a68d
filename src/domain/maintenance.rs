// Maintenance domain model - Mileage thresholds and service status bands
use serde::{Deserialize, Serialize};

pub const DEFAULT_DUE_SOON_WINDOW_KM: i64 = 1000;

const URGENT_PROGRESS: f64 = 90.0;
const DUE_SOON_PROGRESS: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Overdue,
    #[serde(rename = "Due Soon")]
    DueSoon,
    #[serde(rename = "On Schedule")]
    OnSchedule,
}

/// Decides the status band of a bus from its odometer and service threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenancePolicy {
    pub due_soon_window_km: i64,
}

impl Default for MaintenancePolicy {
    fn default() -> Self {
        Self {
            due_soon_window_km: DEFAULT_DUE_SOON_WINDOW_KM,
        }
    }
}

impl MaintenancePolicy {
    pub fn new(due_soon_window_km: i64) -> Self {
        Self { due_soon_window_km }
    }

    pub fn classify(&self, current_mileage: i64, next_service_threshold: i64) -> MaintenanceStatus {
        if current_mileage >= next_service_threshold {
            MaintenanceStatus::Overdue
        } else if current_mileage >= next_service_threshold.saturating_sub(self.due_soon_window_km) {
            MaintenanceStatus::DueSoon
        } else {
            MaintenanceStatus::OnSchedule
        }
    }
}

/// Classify with the standard 1000 km window
pub fn classify(current_mileage: i64, next_service_threshold: i64) -> MaintenanceStatus {
    MaintenancePolicy::default().classify(current_mileage, next_service_threshold)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAlert {
    pub id: String,
    pub bus_number: String,
    pub current_mileage: i64,
    pub next_service_threshold: i64,
    pub required_service: String,
    pub status: MaintenanceStatus,
    /// Distance covered today, derived from terminal QR scans
    pub auto_calculated_daily: Option<i64>,
}

impl MaintenanceAlert {
    pub fn new(
        id: impl Into<String>,
        bus_number: impl Into<String>,
        current_mileage: i64,
        next_service_threshold: i64,
        required_service: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            bus_number: bus_number.into(),
            current_mileage,
            next_service_threshold,
            required_service: required_service.into(),
            status: classify(current_mileage, next_service_threshold),
            auto_calculated_daily: None,
        }
    }

    pub fn with_auto_daily(mut self, km: i64) -> Self {
        self.auto_calculated_daily = Some(km);
        self
    }

    /// Add a day's distance and re-run the classifier.
    ///
    /// The increment is not bounds checked; a negative distance rolls the
    /// odometer back.
    pub fn with_distance(&self, daily_distance: i64, policy: &MaintenancePolicy) -> Self {
        self.with_mileage(self.current_mileage.saturating_add(daily_distance), policy)
    }

    /// Replace the odometer reading and re-run the classifier
    pub fn with_mileage(&self, current_mileage: i64, policy: &MaintenancePolicy) -> Self {
        Self {
            current_mileage,
            status: policy.classify(current_mileage, self.next_service_threshold),
            ..self.clone()
        }
    }

    pub fn progress(&self) -> ServiceProgress {
        ServiceProgress::new(
            self.bus_number.clone(),
            self.current_mileage,
            self.next_service_threshold,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressBand {
    Urgent,
    #[serde(rename = "Due Soon")]
    DueSoon,
    Normal,
}

/// How far a bus has run towards its next service, as a percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceProgress {
    pub bus_number: String,
    pub current_mileage: i64,
    pub next_service_threshold: i64,
    pub percent: f64,
    pub band: ProgressBand,
}

impl ServiceProgress {
    pub fn new(bus_number: String, current_mileage: i64, next_service_threshold: i64) -> Self {
        let percent = if next_service_threshold > 0 {
            current_mileage as f64 / next_service_threshold as f64 * 100.0
        } else {
            100.0
        };

        let band = if percent >= URGENT_PROGRESS {
            ProgressBand::Urgent
        } else if percent >= DUE_SOON_PROGRESS {
            ProgressBand::DueSoon
        } else {
            ProgressBand::Normal
        };

        Self {
            bus_number,
            current_mileage,
            next_service_threshold,
            percent,
            band,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceSummary {
    pub overdue: usize,
    pub due_soon: usize,
    pub on_schedule: usize,
}

impl MaintenanceSummary {
    pub fn from_alerts(alerts: &[MaintenanceAlert]) -> Self {
        alerts
            .iter()
            .fold(Self::default(), |mut summary, alert| {
                match alert.status {
                    MaintenanceStatus::Overdue => summary.overdue += 1,
                    MaintenanceStatus::DueSoon => summary.due_soon += 1,
                    MaintenanceStatus::OnSchedule => summary.on_schedule += 1,
                }
                summary
            })
    }

    pub fn needing_attention(&self) -> usize {
        self.overdue + self.due_soon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        let threshold = 30_000;
        for current in (0..threshold - 1000).step_by(250) {
            assert_eq!(classify(current, threshold), MaintenanceStatus::OnSchedule);
        }
        for current in threshold - 1000..threshold {
            assert_eq!(classify(current, threshold), MaintenanceStatus::DueSoon);
        }
        for current in (threshold..threshold + 5000).step_by(100) {
            assert_eq!(classify(current, threshold), MaintenanceStatus::Overdue);
        }
    }

    #[test]
    fn test_due_soon_then_overdue_after_daily_distance() {
        let policy = MaintenancePolicy::default();
        let alert = MaintenanceAlert::new("2", "PB-012", 29_800, 30_000, "Oil Change & Filter");
        assert_eq!(alert.status, MaintenanceStatus::DueSoon);

        let updated = alert.with_distance(300, &policy);
        assert_eq!(updated.current_mileage, 30_100);
        assert_eq!(updated.status, MaintenanceStatus::Overdue);
        assert_eq!(updated.bus_number, "PB-012");
    }

    #[test]
    fn test_non_negative_distance_is_monotonic() {
        let policy = MaintenancePolicy::default();
        let alert = MaintenanceAlert::new("6", "PB-042", 18_500, 30_000, "Oil Change & Filter");
        for distance in [0, 1, 134, 10_000] {
            assert!(alert.with_distance(distance, &policy).current_mileage >= alert.current_mileage);
        }
    }

    #[test]
    fn test_negative_distance_is_accepted() {
        let policy = MaintenancePolicy::default();
        let alert = MaintenanceAlert::new("1", "PB-008", 30_500, 30_000, "Oil Change & Filter");
        let rolled_back = alert.with_distance(-2_000, &policy);
        assert_eq!(rolled_back.current_mileage, 28_500);
        assert_eq!(rolled_back.status, MaintenanceStatus::OnSchedule);
    }

    #[test]
    fn test_custom_window() {
        let policy = MaintenancePolicy::new(5_000);
        assert_eq!(policy.classify(26_000, 30_000), MaintenanceStatus::DueSoon);
        assert_eq!(policy.classify(24_999, 30_000), MaintenanceStatus::OnSchedule);
    }

    #[test]
    fn test_progress_bands() {
        assert_eq!(ServiceProgress::new("PB-031".into(), 29_100, 30_000).band, ProgressBand::Urgent);
        assert_eq!(ServiceProgress::new("PB-012".into(), 24_000, 30_000).band, ProgressBand::DueSoon);
        assert_eq!(ServiceProgress::new("PB-042".into(), 18_500, 30_000).band, ProgressBand::Normal);
        assert_eq!(ServiceProgress::new("PB-000".into(), 10, 0).band, ProgressBand::Urgent);
    }

    #[test]
    fn test_summary_counts() {
        let alerts = vec![
            MaintenanceAlert::new("1", "PB-008", 30_500, 30_000, "Oil Change & Filter"),
            MaintenanceAlert::new("2", "PB-012", 29_800, 30_000, "Oil Change & Filter"),
            MaintenanceAlert::new("6", "PB-042", 18_500, 30_000, "Oil Change & Filter"),
        ];
        let summary = MaintenanceSummary::from_alerts(&alerts);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.due_soon, 1);
        assert_eq!(summary.on_schedule, 1);
        assert_eq!(summary.needing_attention(), 2);
    }

    #[test]
    fn test_status_serializes_with_display_names() {
        let json = serde_json::to_string(&MaintenanceStatus::DueSoon).unwrap();
        assert_eq!(json, "\"Due Soon\"");
    }
}
