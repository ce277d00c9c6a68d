// Live map domain model - Simulated bus positions along the NLEX line
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_SPEED: f64 = 40.0;
pub const MAX_SPEED: f64 = 95.0;
const SPEED_JITTER: f64 = 5.0;
const ON_TIME_STEP: f64 = 0.3;
const DELAYED_STEP: f64 = 0.1;

/// Units whose y drops below this have reached the end of the line
pub const WRAP_Y: f64 = 15.0;
pub const START_POSITION: Position = Position { x: 20.0, y: 85.0 };

/// Map coordinates in percent of the map's width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitStatus {
    OnTime,
    Delayed,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusUnit {
    pub id: String,
    pub bus_number: String,
    pub driver: String,
    pub speed: u32,
    pub location: String,
    pub position: Position,
    pub status: UnitStatus,
    pub route: String,
    pub last_update: String,
}

impl BusUnit {
    pub fn is_active(&self) -> bool {
        self.status != UnitStatus::Offline
    }

    /// Move one tick northbound with a little speed noise
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.is_active() {
            return;
        }

        let jitter = rng.gen_range(-SPEED_JITTER..SPEED_JITTER);
        let speed = (self.speed as f64 + jitter).clamp(MIN_SPEED, MAX_SPEED);

        let step = match self.status {
            UnitStatus::Delayed => DELAYED_STEP,
            _ => ON_TIME_STEP,
        };
        let mut next = Position {
            x: self.position.x + step * 0.5,
            y: self.position.y - step,
        };
        if next.y < WRAP_Y {
            next = START_POSITION;
        }

        self.speed = speed.round() as u32;
        self.position = next;
        self.last_update = "Just now".to_string();
    }
}

/// Advance every active unit by one tick
pub fn tick<R: Rng + ?Sized>(units: &mut [BusUnit], rng: &mut R) {
    for unit in units.iter_mut() {
        unit.advance(rng);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
}

pub const ROUTE_WAYPOINTS: [Waypoint; 10] = [
    Waypoint { x: 18.0, y: 88.0, label: "Manila (Balintawak)" },
    Waypoint { x: 25.0, y: 78.0, label: "Valenzuela" },
    Waypoint { x: 30.0, y: 68.0, label: "Meycauayan" },
    Waypoint { x: 35.0, y: 58.0, label: "Marilao" },
    Waypoint { x: 40.0, y: 50.0, label: "Bocaue" },
    Waypoint { x: 45.0, y: 44.0, label: "Balagtas" },
    Waypoint { x: 50.0, y: 38.0, label: "Guiguinto" },
    Waypoint { x: 58.0, y: 32.0, label: "Plaridel" },
    Waypoint { x: 65.0, y: 25.0, label: "San Rafael" },
    Waypoint { x: 72.0, y: 18.0, label: "San Miguel" },
];

/// Point-in-time view of the fleet on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSnapshot {
    pub units: Vec<BusUnit>,
    pub active: usize,
    pub on_time: usize,
    pub delayed: usize,
}

impl FleetSnapshot {
    pub fn from_units(units: &[BusUnit]) -> Self {
        let count = |status: UnitStatus| units.iter().filter(|u| u.status == status).count();
        Self {
            units: units.to_vec(),
            active: units.iter().filter(|u| u.is_active()).count(),
            on_time: count(UnitStatus::OnTime),
            delayed: count(UnitStatus::Delayed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit(status: UnitStatus, speed: u32, x: f64, y: f64) -> BusUnit {
        BusUnit {
            id: "1".to_string(),
            bus_number: "PB-888".to_string(),
            driver: "Juan Dela Cruz".to_string(),
            speed,
            location: "Near San Miguel Exit".to_string(),
            position: Position { x, y },
            status,
            route: "Manila - Baguio via NLEX".to_string(),
            last_update: "2 mins ago".to_string(),
        }
    }

    #[test]
    fn test_on_time_unit_moves_by_full_step() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bus = unit(UnitStatus::OnTime, 78, 60.0, 30.0);
        bus.advance(&mut rng);
        assert!((bus.position.y - 29.7).abs() < 1e-9);
        assert!((bus.position.x - 60.15).abs() < 1e-9);
        assert_eq!(bus.last_update, "Just now");
    }

    #[test]
    fn test_delayed_unit_moves_by_short_step() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bus = unit(UnitStatus::Delayed, 45, 35.0, 55.0);
        bus.advance(&mut rng);
        assert!((bus.position.y - 54.9).abs() < 1e-9);
        assert!((bus.position.x - 35.05).abs() < 1e-9);
    }

    #[test]
    fn test_speed_stays_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut units = vec![
            unit(UnitStatus::OnTime, 92, 48.0, 42.0),
            unit(UnitStatus::Delayed, 45, 35.0, 55.0),
            unit(UnitStatus::OnTime, 0, 50.0, 80.0),
        ];
        for _ in 0..500 {
            tick(&mut units, &mut rng);
            for bus in &units {
                assert!((40..=95).contains(&bus.speed), "speed {} out of range", bus.speed);
            }
        }
    }

    #[test]
    fn test_offline_unit_is_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = unit(UnitStatus::Offline, 0, 20.0, 85.0);
        let mut units = vec![original.clone()];
        tick(&mut units, &mut rng);
        assert_eq!(units[0], original);
    }

    #[test]
    fn test_wraps_to_start_at_end_of_line() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bus = unit(UnitStatus::OnTime, 85, 75.0, 15.1);
        bus.advance(&mut rng);
        assert_eq!(bus.position, START_POSITION);

        let mut bus = unit(UnitStatus::OnTime, 85, 75.0, 16.0);
        bus.advance(&mut rng);
        assert!(bus.position.y >= WRAP_Y);
        assert_ne!(bus.position, START_POSITION);
    }

    #[test]
    fn test_snapshot_counts() {
        let units = vec![
            unit(UnitStatus::OnTime, 85, 75.0, 15.0),
            unit(UnitStatus::Delayed, 45, 35.0, 55.0),
            unit(UnitStatus::Offline, 0, 20.0, 85.0),
        ];
        let snapshot = FleetSnapshot::from_units(&units);
        assert_eq!(snapshot.active, 2);
        assert_eq!(snapshot.on_time, 1);
        assert_eq!(snapshot.delayed, 1);
        assert_eq!(snapshot.units.len(), 3);
    }
}
