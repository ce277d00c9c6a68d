// Live map service - Ticking position simulation with snapshot broadcast
use crate::domain::fleet_map::{tick, BusUnit, FleetSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct LiveMapService {
    units: Arc<RwLock<Vec<BusUnit>>>,
    snapshots: Arc<watch::Sender<FleetSnapshot>>,
    stopping: Arc<watch::Sender<bool>>,
}

impl LiveMapService {
    pub fn new(units: Vec<BusUnit>) -> Self {
        let (tx, _rx) = watch::channel(FleetSnapshot::from_units(&units));
        let (stopping, _) = watch::channel(false);
        Self {
            units: Arc::new(RwLock::new(units)),
            snapshots: Arc::new(tx),
            stopping: Arc::new(stopping),
        }
    }

    pub async fn snapshot(&self) -> FleetSnapshot {
        let units = self.units.read().await;
        FleetSnapshot::from_units(&units)
    }

    /// Receiver that sees the latest snapshot and every one after it
    pub fn subscribe(&self) -> watch::Receiver<FleetSnapshot> {
        self.snapshots.subscribe()
    }

    /// Tell open subscribers the feed is closing
    pub fn stop(&self) {
        self.stopping.send_replace(true);
    }

    /// Completes once `stop` has been called
    pub fn stopped(&self) -> impl Future<Output = ()> + Send + use<> {
        wait_for_stop(self.stopping.subscribe())
    }

    /// Advance every unit once and publish the result
    pub async fn tick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> FleetSnapshot {
        let snapshot = {
            let mut units = self.units.write().await;
            tick(&mut units, rng);
            FleetSnapshot::from_units(&units)
        };
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }

    /// Run the simulation on a fixed period until the handle is aborted
    pub fn spawn_ticker(&self, period: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut interval = tokio::time::interval(period);
            // The first tick of an interval completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                let snapshot = service.tick_with(&mut rng).await;
                tracing::debug!(
                    "Map tick: {} active, {} on time, {} delayed",
                    snapshot.active,
                    snapshot.on_time,
                    snapshot.delayed
                );
            }
        })
    }
}

async fn wait_for_stop(mut rx: watch::Receiver<bool>) {
    loop {
        let stopping = *rx.borrow_and_update();
        if stopping || rx.changed().await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fleet_map::{UnitStatus, START_POSITION};
    use crate::infrastructure::seed;

    #[tokio::test]
    async fn test_tick_publishes_snapshot() {
        let service = LiveMapService::new(seed::bus_units());
        let mut rx = service.subscribe();
        let mut rng = StdRng::seed_from_u64(11);

        let before = service.snapshot().await;
        let after = service.tick_with(&mut rng).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), after);

        for (old, new) in before.units.iter().zip(after.units.iter()) {
            if old.status == UnitStatus::Offline {
                assert_eq!(old, new);
            } else {
                assert!(new.position.y < old.position.y || new.position == START_POSITION);
            }
        }
    }

    #[tokio::test]
    async fn test_unit_at_end_of_line_reads_back_at_start() {
        let service = LiveMapService::new(seed::bus_units());
        let mut rng = StdRng::seed_from_u64(5);
        // PB-888 starts at y = 15 and wraps on its first tick
        service.tick_with(&mut rng).await;

        let snapshot = service.snapshot().await;
        let lead = snapshot.units.iter().find(|u| u.bus_number == "PB-888").unwrap();
        assert_eq!(lead.position, START_POSITION);
    }

    #[tokio::test]
    async fn test_ticker_runs_on_period() {
        let service = LiveMapService::new(seed::bus_units());
        let mut rx = service.subscribe();
        let handle = service.spawn_ticker(Duration::from_millis(20));

        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .unwrap()
            .unwrap();
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_stop_releases_waiters() {
        let service = LiveMapService::new(seed::bus_units());
        let stopped = service.stopped();
        service.stop();
        tokio::time::timeout(Duration::from_secs(1), stopped).await.unwrap();

        // Late waiters see the flag immediately
        tokio::time::timeout(Duration::from_secs(1), service.stopped())
            .await
            .unwrap();
    }
}
