use crate::domain::maintenance::{MaintenancePolicy, DEFAULT_DUE_SOON_WINDOW_KM};
use crate::domain::waybill::PricingPolicy;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FleetConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub maintenance: MaintenanceSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationSettings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MaintenanceSettings {
    #[serde(default = "default_due_soon_window_km")]
    pub due_soon_window_km: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    #[serde(default = "default_base_rate")]
    pub base_rate_per_kg: f64,
    #[serde(default = "default_electronics_multiplier")]
    pub electronics_multiplier: f64,
    #[serde(default = "default_perishable_multiplier")]
    pub perishable_multiplier: f64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_tick_interval_ms() -> u64 {
    3000
}

fn default_due_soon_window_km() -> i64 {
    DEFAULT_DUE_SOON_WINDOW_KM
}

fn default_base_rate() -> f64 {
    PricingPolicy::default().base_rate_per_kg
}

fn default_electronics_multiplier() -> f64 {
    PricingPolicy::default().electronics_multiplier
}

fn default_perishable_multiplier() -> f64 {
    PricingPolicy::default().perishable_multiplier
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for MaintenanceSettings {
    fn default() -> Self {
        Self {
            due_soon_window_km: default_due_soon_window_km(),
        }
    }
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            base_rate_per_kg: default_base_rate(),
            electronics_multiplier: default_electronics_multiplier(),
            perishable_multiplier: default_perishable_multiplier(),
        }
    }
}

impl FleetConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_interval_ms.max(1))
    }

    pub fn maintenance_policy(&self) -> MaintenancePolicy {
        MaintenancePolicy::new(self.maintenance.due_soon_window_km)
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            base_rate_per_kg: self.pricing.base_rate_per_kg,
            electronics_multiplier: self.pricing.electronics_multiplier,
            perishable_multiplier: self.pricing.perishable_multiplier,
        }
    }
}

/// Load `config/fleet` if present, then apply `FLEET__*` environment overrides
pub fn load_fleet_config() -> anyhow::Result<FleetConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/fleet").required(false))
        .add_source(
            config::Environment::with_prefix("FLEET")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
