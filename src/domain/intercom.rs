// Intercom domain model - Active trips and dispatch/conductor message threads
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    #[serde(rename = "In Transit")]
    InTransit,
    Departed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub waybill_id: String,
    pub description: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveTrip {
    pub id: String,
    pub bus_number: String,
    pub conductor_name: String,
    pub route: String,
    pub status: TripStatus,
    pub last_active: String,
    pub current_location: String,
    pub eta: String,
    pub cargo: Vec<ManifestEntry>,
}

impl ActiveTrip {
    /// Case-insensitive match on bus number, conductor or route
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.bus_number, &self.conductor_name, &self.route]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Admin,
    Conductor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    pub sent_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

impl Message {
    pub fn from_admin(id: String, text: &str, sent_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            sender: MessageSender::Admin,
            sent_at,
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> ActiveTrip {
        ActiveTrip {
            id: "3".to_string(),
            bus_number: "PB-042".to_string(),
            conductor_name: "Ana Garcia".to_string(),
            route: "Pangasinan to Laoag".to_string(),
            status: TripStatus::InTransit,
            last_active: "1 min ago".to_string(),
            current_location: "Pozorrubio".to_string(),
            eta: "1 hr 15 mins to next terminal".to_string(),
            cargo: Vec::new(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let trip = trip();
        assert!(trip.matches("pb-042"));
        assert!(trip.matches("GARCIA"));
        assert!(trip.matches("laoag"));
        assert!(trip.matches("  "));
        assert!(!trip.matches("baguio"));
    }

    #[test]
    fn test_admin_message_is_trimmed() {
        let msg = Message::from_admin("m9".to_string(), "  Copy that  ", Utc::now());
        assert_eq!(msg.text, "Copy that");
        assert_eq!(msg.sender, MessageSender::Admin);
    }
}
