// Reports domain model - Period metrics, weekly volume and recurring maintenance issues
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodMetrics {
    pub trips: u64,
    pub waybills: u64,
    pub maintenance: u64,
    pub satisfaction: f64,
}

impl PeriodMetrics {
    pub fn for_range(range: DateRange) -> Self {
        let (trips, waybills, maintenance, satisfaction) = match range {
            DateRange::Today => (42, 28, 3, 4.5),
            DateRange::Week => (294, 196, 12, 4.6),
            DateRange::Month => (1_248, 832, 48, 4.7),
            DateRange::Quarter => (3_744, 2_496, 144, 4.6),
            DateRange::Year => (14_976, 9_984, 576, 4.5),
        };
        Self {
            trips,
            waybills,
            maintenance,
            satisfaction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Read the direction off a signed change label such as "+2.1%"
    pub fn of(change: &str) -> Self {
        let amount = change.trim_start_matches(['+', '-']).trim_end_matches('%');
        if amount.parse::<f64>().is_ok_and(|v| v == 0.0) {
            return Trend::Neutral;
        }
        match change.chars().next() {
            Some('+') => Trend::Up,
            Some('-') => Trend::Down,
            _ => Trend::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub trend: Trend,
}

impl MetricCard {
    fn new(title: &'static str, value: String, change: &'static str) -> Self {
        Self { title, value, change, trend: Trend::of(change) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyVolume {
    pub day: &'static str,
    pub passengers: u32,
    pub cargo: u32,
}

pub const WEEKLY_VOLUME: [WeeklyVolume; 7] = [
    WeeklyVolume { day: "Mon", passengers: 1250, cargo: 89 },
    WeeklyVolume { day: "Tue", passengers: 1340, cargo: 102 },
    WeeklyVolume { day: "Wed", passengers: 1180, cargo: 76 },
    WeeklyVolume { day: "Thu", passengers: 1420, cargo: 118 },
    WeeklyVolume { day: "Fri", passengers: 1680, cargo: 145 },
    WeeklyVolume { day: "Sat", passengers: 1890, cargo: 156 },
    WeeklyVolume { day: "Sun", passengers: 1560, cargo: 132 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceIssue {
    pub id: &'static str,
    pub bus_model: &'static str,
    pub issue_type: &'static str,
    pub occurrences: u32,
    pub avg_resolution_days: u32,
    pub severity: Severity,
}

pub const MAINTENANCE_ISSUES: [MaintenanceIssue; 6] = [
    MaintenanceIssue {
        id: "1",
        bus_model: "Hino RK8JSKA (45-seater)",
        issue_type: "Brake System Wear",
        occurrences: 12,
        avg_resolution_days: 2,
        severity: Severity::High,
    },
    MaintenanceIssue {
        id: "2",
        bus_model: "Yutong ZK6127H (52-seater)",
        issue_type: "Air Conditioning Failure",
        occurrences: 8,
        avg_resolution_days: 3,
        severity: Severity::Medium,
    },
    MaintenanceIssue {
        id: "3",
        bus_model: "Hino RK8JSKA (45-seater)",
        issue_type: "Suspension Issues",
        occurrences: 7,
        avg_resolution_days: 4,
        severity: Severity::Medium,
    },
    MaintenanceIssue {
        id: "4",
        bus_model: "Yutong ZK6127H (52-seater)",
        issue_type: "Engine Oil Leak",
        occurrences: 6,
        avg_resolution_days: 1,
        severity: Severity::High,
    },
    MaintenanceIssue {
        id: "5",
        bus_model: "Hino RK8JSKA (45-seater)",
        issue_type: "Alternator Replacement",
        occurrences: 5,
        avg_resolution_days: 2,
        severity: Severity::Medium,
    },
    MaintenanceIssue {
        id: "6",
        bus_model: "Santarosa Voyager (45-seater)",
        issue_type: "Tire Replacement",
        occurrences: 4,
        avg_resolution_days: 1,
        severity: Severity::Low,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub range: DateRange,
    pub metrics: PeriodMetrics,
    pub cards: Vec<MetricCard>,
    pub weekly_volume: Vec<WeeklyVolume>,
    pub maintenance_issues: Vec<MaintenanceIssue>,
}

impl Report {
    pub fn for_range(range: DateRange) -> Self {
        let metrics = PeriodMetrics::for_range(range);
        let cards = vec![
            MetricCard::new("Total Completed Trips", group_thousands(metrics.trips), "+12.5%"),
            MetricCard::new("Cargo Waybills Processed", group_thousands(metrics.waybills), "+8.3%"),
            MetricCard::new(
                "Maintenance Alerts Resolved",
                group_thousands(metrics.maintenance),
                "-5.2%",
            ),
            MetricCard::new("On-Time Performance (OTP)", "94%".to_string(), "+2.1%"),
        ];

        Self {
            range,
            metrics,
            cards,
            weekly_volume: WEEKLY_VOLUME.to_vec(),
            maintenance_issues: MAINTENANCE_ISSUES.to_vec(),
        }
    }
}

/// Format with comma thousands separators, e.g. 14976 -> "14,976"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(576), "576");
        assert_eq!(group_thousands(1_248), "1,248");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_trend_from_change_label() {
        assert_eq!(Trend::of("+12.5%"), Trend::Up);
        assert_eq!(Trend::of("-5.2%"), Trend::Down);
        assert_eq!(Trend::of("0.0%"), Trend::Neutral);
        assert_eq!(Trend::of("+0%"), Trend::Neutral);
    }

    #[test]
    fn test_report_for_year() {
        let report = Report::for_range(DateRange::Year);
        assert_eq!(report.cards.len(), 4);
        assert_eq!(report.cards[0].value, "14,976");
        assert_eq!(report.cards[1].value, "9,984");
        assert_eq!(report.cards[2].trend, Trend::Down);
        assert_eq!(report.weekly_volume.len(), 7);
        assert_eq!(report.maintenance_issues[0].issue_type, "Brake System Wear");
    }
}
