// Waybill domain model - Cargo consignments, pricing and the four-step draft
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Terminal {
    Sabang,
    Cubao,
    GracePark,
    Pasay,
    Baguio,
    Tuguegarao,
    Vigan,
    Laoag,
}

impl Terminal {
    pub const ALL: [Terminal; 8] = [
        Terminal::Sabang,
        Terminal::Cubao,
        Terminal::GracePark,
        Terminal::Pasay,
        Terminal::Baguio,
        Terminal::Tuguegarao,
        Terminal::Vigan,
        Terminal::Laoag,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Terminal::Sabang => "BTI Headquarters - Sabang, Baliwag",
            Terminal::Cubao => "Cubao Terminal - Quezon City",
            Terminal::GracePark => "Grace Park Terminal - Caloocan",
            Terminal::Pasay => "Pasay Terminal - Manila",
            Terminal::Baguio => "Baguio Terminal",
            Terminal::Tuguegarao => "Tuguegarao Terminal",
            Terminal::Vigan => "Vigan Terminal",
            Terminal::Laoag => "Laoag Terminal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CargoType {
    Document,
    Perishable,
    Electronics,
    Standard,
}

impl CargoType {
    pub const ALL: [CargoType; 4] = [
        CargoType::Document,
        CargoType::Perishable,
        CargoType::Electronics,
        CargoType::Standard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CargoType::Document => "Document",
            CargoType::Perishable => "Perishable",
            CargoType::Electronics => "Electronics",
            CargoType::Standard => "Standard Parcel",
        }
    }
}

/// Per-kilogram tariff with premiums for special handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPolicy {
    pub base_rate_per_kg: f64,
    pub electronics_multiplier: f64,
    pub perishable_multiplier: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_rate_per_kg: 50.0,
            electronics_multiplier: 1.5,
            perishable_multiplier: 1.3,
        }
    }
}

impl PricingPolicy {
    /// Price in whole pesos. Missing or non-positive weights price at zero.
    pub fn price(&self, weight_kg: Option<f64>, cargo_type: Option<CargoType>) -> i64 {
        let weight = match weight_kg {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => return 0,
        };

        let mut price = weight * self.base_rate_per_kg;
        match cargo_type {
            Some(CargoType::Electronics) => price *= self.electronics_multiplier,
            Some(CargoType::Perishable) => price *= self.perishable_multiplier,
            _ => {}
        }
        price.round() as i64
    }
}

/// Lenient weight parsing for free-text input
pub fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|w| w.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WaybillStep {
    SenderDetails,
    ReceiverDetails,
    CargoInformation,
    ReviewSubmit,
}

impl WaybillStep {
    pub const ALL: [WaybillStep; 4] = [
        WaybillStep::SenderDetails,
        WaybillStep::ReceiverDetails,
        WaybillStep::CargoInformation,
        WaybillStep::ReviewSubmit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            WaybillStep::SenderDetails => 1,
            WaybillStep::ReceiverDetails => 2,
            WaybillStep::CargoInformation => 3,
            WaybillStep::ReviewSubmit => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WaybillStep::SenderDetails => "Sender Details",
            WaybillStep::ReceiverDetails => "Receiver Details",
            WaybillStep::CargoInformation => "Cargo Information",
            WaybillStep::ReviewSubmit => "Review & Submit",
        }
    }

    pub fn next(&self) -> Option<WaybillStep> {
        Self::ALL.get(self.number() as usize).copied()
    }

    pub fn previous(&self) -> Option<WaybillStep> {
        (self.number() as usize)
            .checked_sub(2)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaybillData {
    pub sender_name: String,
    pub sender_contact: String,
    pub pickup_terminal: Option<Terminal>,
    pub receiver_name: String,
    pub receiver_contact: String,
    pub delivery_terminal: Option<Terminal>,
    pub cargo_type: Option<CargoType>,
    pub cargo_description: String,
    pub cargo_weight_kg: Option<f64>,
    pub cargo_value: Option<f64>,
    pub special_instructions: String,
    pub assigned_bus: Option<String>,
}

/// Partial update of a draft; absent fields are left as they are
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaybillPatch {
    pub sender_name: Option<String>,
    pub sender_contact: Option<String>,
    pub pickup_terminal: Option<Terminal>,
    pub receiver_name: Option<String>,
    pub receiver_contact: Option<String>,
    pub delivery_terminal: Option<Terminal>,
    pub cargo_type: Option<CargoType>,
    pub cargo_description: Option<String>,
    pub cargo_weight_kg: Option<f64>,
    pub cargo_value: Option<f64>,
    pub special_instructions: Option<String>,
    pub assigned_bus: Option<String>,
}

impl WaybillData {
    pub fn apply(&mut self, patch: WaybillPatch) {
        if let Some(v) = patch.sender_name {
            self.sender_name = v;
        }
        if let Some(v) = patch.sender_contact {
            self.sender_contact = v;
        }
        if let Some(v) = patch.pickup_terminal {
            self.pickup_terminal = Some(v);
        }
        if let Some(v) = patch.receiver_name {
            self.receiver_name = v;
        }
        if let Some(v) = patch.receiver_contact {
            self.receiver_contact = v;
        }
        if let Some(v) = patch.delivery_terminal {
            self.delivery_terminal = Some(v);
        }
        if let Some(v) = patch.cargo_type {
            self.cargo_type = Some(v);
        }
        if let Some(v) = patch.cargo_description {
            self.cargo_description = v;
        }
        if let Some(v) = patch.cargo_weight_kg {
            self.cargo_weight_kg = Some(v);
        }
        if let Some(v) = patch.cargo_value {
            self.cargo_value = Some(v);
        }
        if let Some(v) = patch.special_instructions {
            self.special_instructions = v;
        }
        if let Some(v) = patch.assigned_bus {
            self.assigned_bus = Some(v).filter(|bus| !bus.trim().is_empty());
        }
    }

    /// Required fields of one step that are still blank
    pub fn missing_fields(&self, step: WaybillStep) -> Vec<&'static str> {
        let blank = |s: &str| s.trim().is_empty();
        let mut missing = Vec::new();
        match step {
            WaybillStep::SenderDetails => {
                if blank(&self.sender_name) {
                    missing.push("sender_name");
                }
                if blank(&self.sender_contact) {
                    missing.push("sender_contact");
                }
                if self.pickup_terminal.is_none() {
                    missing.push("pickup_terminal");
                }
            }
            WaybillStep::ReceiverDetails => {
                if blank(&self.receiver_name) {
                    missing.push("receiver_name");
                }
                if blank(&self.receiver_contact) {
                    missing.push("receiver_contact");
                }
                if self.delivery_terminal.is_none() {
                    missing.push("delivery_terminal");
                }
            }
            WaybillStep::CargoInformation => {
                if self.cargo_type.is_none() {
                    missing.push("cargo_type");
                }
                if blank(&self.cargo_description) {
                    missing.push("cargo_description");
                }
                if self.cargo_weight_kg.is_none() {
                    missing.push("cargo_weight_kg");
                }
                if self.cargo_value.is_none() {
                    missing.push("cargo_value");
                }
            }
            WaybillStep::ReviewSubmit => {}
        }
        missing
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        WaybillStep::ALL
            .iter()
            .flat_map(|step| self.missing_fields(*step))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub number: u8,
    pub title: &'static str,
    pub state: StepState,
    pub missing_fields: Vec<&'static str>,
}

/// A waybill being filled in, one step at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaybillDraft {
    pub id: String,
    pub step: WaybillStep,
    pub data: WaybillData,
}

impl WaybillDraft {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step: WaybillStep::SenderDetails,
            data: WaybillData::default(),
        }
    }

    /// Move forward; stays put on the last step
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back; stays put on the first step
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    pub fn steps(&self) -> Vec<StepView> {
        let last = WaybillStep::ReviewSubmit;
        WaybillStep::ALL
            .iter()
            .map(|step| {
                let state = if *step == self.step {
                    StepState::Current
                } else if *step < self.step && *step != last {
                    StepState::Complete
                } else {
                    StepState::Upcoming
                };
                StepView {
                    number: step.number(),
                    title: step.title(),
                    state,
                    missing_fields: self.data.missing_fields(*step),
                }
            })
            .collect()
    }

    pub fn progress_percent(&self) -> f64 {
        let span = (WaybillStep::ALL.len() - 1) as f64;
        (self.step.number() - 1) as f64 / span * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waybill {
    pub tracking_number: String,
    pub data: WaybillData,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// `TRK-` followed by the last eight digits of the epoch milliseconds
pub fn tracking_number(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(8)..];
    format!("TRK-{}", tail)
}

const MAX_TRACKING_ATTEMPTS: i64 = 1000;

/// First clock-derived tracking number not already issued, stepping a millisecond per collision
pub fn free_tracking_number(at: DateTime<Utc>, issued: &[Waybill]) -> Option<String> {
    (0..MAX_TRACKING_ATTEMPTS)
        .map(|offset| tracking_number(at + chrono::Duration::milliseconds(offset)))
        .find(|candidate| !issued.iter().any(|w| &w.tracking_number == candidate))
}
