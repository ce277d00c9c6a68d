// Cargo handoff domain model - Consignments waiting to be received at the terminal
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivedCargo {
    pub id: String,
    pub tracking_number: String,
    pub bus_number: String,
    pub origin: String,
    pub arrived_at: String,
    pub packages: u32,
}

impl ArrivedCargo {
    pub fn receipt_note(&self) -> String {
        format!(
            "Cargo {} received and unloaded ({} packages) from {} - {}",
            self.tracking_number, self.packages, self.bus_number, self.origin
        )
    }
}
