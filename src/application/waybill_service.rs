// Waybill service - Drafting, pricing and issuing cargo waybills
use crate::application::error::{ServiceError, ServiceResult};
use crate::application::fleet_repository::{DraftEdit, FleetRepository, WaybillIssue};
use crate::application::ids::prefixed_id;
use crate::domain::waybill::{
    free_tracking_number, CargoType, PricingPolicy, StepView, Terminal, Waybill, WaybillData,
    WaybillDraft, WaybillPatch,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub weight_kg: Option<f64>,
    pub cargo_type: Option<CargoType>,
    pub price: i64,
}

/// A draft together with its derived step states and running price
#[derive(Debug, Clone, Serialize)]
pub struct DraftView {
    pub id: String,
    pub step: u8,
    pub title: &'static str,
    pub progress_percent: f64,
    pub steps: Vec<StepView>,
    pub data: WaybillData,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOption<T> {
    pub value: T,
    pub label: &'static str,
}

/// Choices offered by the terminal and cargo type pickers
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub terminals: Vec<FormOption<Terminal>>,
    pub cargo_types: Vec<FormOption<CargoType>>,
}

#[derive(Clone)]
pub struct WaybillService {
    repository: Arc<dyn FleetRepository>,
    pricing: PricingPolicy,
}

impl WaybillService {
    pub fn new(repository: Arc<dyn FleetRepository>, pricing: PricingPolicy) -> Self {
        Self { repository, pricing }
    }

    pub fn quote(&self, weight_kg: Option<f64>, cargo_type: Option<CargoType>) -> Quote {
        Quote {
            weight_kg,
            cargo_type,
            price: self.pricing.price(weight_kg, cargo_type),
        }
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            terminals: Terminal::ALL
                .iter()
                .map(|t| FormOption { value: *t, label: t.label() })
                .collect(),
            cargo_types: CargoType::ALL
                .iter()
                .map(|c| FormOption { value: *c, label: c.label() })
                .collect(),
        }
    }

    pub async fn list_waybills(&self) -> ServiceResult<Vec<Waybill>> {
        Ok(self.repository.list_waybills().await?)
    }

    pub async fn open_draft(&self) -> ServiceResult<DraftView> {
        let draft = WaybillDraft::new(prefixed_id("wd-"));
        self.repository.save_draft(draft.clone()).await?;
        tracing::debug!("Waybill draft {} opened", draft.id);
        Ok(self.view(&draft))
    }

    pub async fn get_draft(&self, id: &str) -> ServiceResult<DraftView> {
        let draft = self.find_draft(id).await?;
        Ok(self.view(&draft))
    }

    pub async fn update_draft(&self, id: &str, patch: WaybillPatch) -> ServiceResult<DraftView> {
        self.edit_draft(id, Box::new(move |draft: &mut WaybillDraft| draft.data.apply(patch)))
            .await
    }

    /// Step forward; the form does not block on missing fields until submit
    pub async fn next_step(&self, id: &str) -> ServiceResult<DraftView> {
        self.edit_draft(id, Box::new(|draft: &mut WaybillDraft| {
            draft.advance();
        }))
        .await
    }

    pub async fn previous_step(&self, id: &str) -> ServiceResult<DraftView> {
        self.edit_draft(id, Box::new(|draft: &mut WaybillDraft| {
            draft.retreat();
        }))
        .await
    }

    /// Issue the waybill and drop the draft in one repository step, so a draft yields at most one waybill
    pub async fn submit_draft(&self, id: &str) -> ServiceResult<Waybill> {
        let pricing = self.pricing;
        let created_at = Utc::now();
        let draft_id = id.to_string();
        let issue: WaybillIssue = Box::new(move |draft: &WaybillDraft, issued: &[Waybill]| {
            let missing = draft.data.missing_required();
            if !missing.is_empty() {
                return Err(ServiceError::MissingFields(missing));
            }
            // Tracking numbers come from the clock; step forward a millisecond on collision
            let tracking_number = free_tracking_number(created_at, issued).ok_or_else(|| {
                ServiceError::Internal(anyhow::anyhow!(
                    "could not allocate a tracking number for draft {}",
                    draft_id
                ))
            })?;
            Ok(Waybill {
                tracking_number,
                data: draft.data.clone(),
                price: pricing.price(draft.data.cargo_weight_kg, draft.data.cargo_type),
                created_at,
            })
        });

        let waybill = self
            .repository
            .submit_draft(id, issue)
            .await?
            .ok_or_else(|| ServiceError::not_found("draft", id))??;
        tracing::info!(
            "Waybill created successfully! Tracking Number: {} (PHP {})",
            waybill.tracking_number,
            waybill.price
        );
        Ok(waybill)
    }

    pub async fn cancel_draft(&self, id: &str) -> ServiceResult<()> {
        self.repository
            .remove_draft(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("draft", id))?;
        tracing::info!("Waybill draft {} cancelled", id);
        Ok(())
    }

    async fn find_draft(&self, id: &str) -> ServiceResult<WaybillDraft> {
        self.repository
            .find_draft(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("draft", id))
    }

    async fn edit_draft(&self, id: &str, edit: DraftEdit) -> ServiceResult<DraftView> {
        let draft = self
            .repository
            .edit_draft(id, edit)
            .await?
            .ok_or_else(|| ServiceError::not_found("draft", id))?;
        Ok(self.view(&draft))
    }

    fn view(&self, draft: &WaybillDraft) -> DraftView {
        DraftView {
            id: draft.id.clone(),
            step: draft.step.number(),
            title: draft.step.title(),
            progress_percent: draft.progress_percent(),
            steps: draft.steps(),
            data: draft.data.clone(),
            price: self
                .pricing
                .price(draft.data.cargo_weight_kg, draft.data.cargo_type),
        }
    }
}
