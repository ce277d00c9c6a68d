// Intercom service - Dispatch messaging with conductors on active trips
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::fleet_repository::FleetRepository;
use crate::application::ids::prefixed_id;
use crate::domain::intercom::{ActiveTrip, Message};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub trip: ActiveTrip,
    pub messages: Vec<Message>,
}

#[derive(Clone)]
pub struct IntercomService {
    repository: Arc<dyn FleetRepository>,
}

impl IntercomService {
    pub fn new(repository: Arc<dyn FleetRepository>) -> Self {
        Self { repository }
    }

    pub async fn search_trips(&self, query: &str) -> ServiceResult<Vec<ActiveTrip>> {
        let trips = self.repository.list_active_trips().await?;
        Ok(trips.into_iter().filter(|t| t.matches(query)).collect())
    }

    pub async fn conversation(&self, trip_id: &str) -> ServiceResult<Conversation> {
        let trip = self.find_trip(trip_id).await?;
        let messages = self.repository.list_messages(trip_id).await?;
        Ok(Conversation { trip, messages })
    }

    pub async fn send(&self, trip_id: &str, text: &str) -> ServiceResult<Message> {
        if text.trim().is_empty() {
            return Err(ServiceError::Validation("Message text must not be empty".to_string()));
        }
        let trip = self.find_trip(trip_id).await?;

        let message = Message::from_admin(prefixed_id("m"), text, Utc::now());
        self.repository.append_message(trip_id, message.clone()).await?;
        tracing::info!("Intercom message sent to {} ({})", trip.conductor_name, trip.bus_number);
        Ok(message)
    }

    async fn find_trip(&self, trip_id: &str) -> ServiceResult<ActiveTrip> {
        self.repository
            .find_active_trip(trip_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("trip", trip_id))
    }
}
