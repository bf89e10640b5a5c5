//! One planning request: validate the form, fetch context, build the prompt, generate.

use anyhow::Result;
use tracing::info;

use crate::backend::{DynBackend, generate_itinerary};
use crate::context::ContextSource;
use crate::prompt::build_prompt;
use crate::trip::{FormField, TripRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    Itinerary(String),
    /// Generation was skipped because these required fields were empty.
    MissingFields(Vec<FormField>),
}

pub struct TripPlanner<'a> {
    context: &'a dyn ContextSource,
    backend: &'a DynBackend,
}

impl<'a> TripPlanner<'a> {
    pub fn new(context: &'a dyn ContextSource, backend: &'a DynBackend) -> Self {
        Self { context, backend }
    }

    pub async fn plan(&self, request: &TripRequest) -> Result<PlanOutcome> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            info!(?missing, "trip request incomplete, skipping generation");
            return Ok(PlanOutcome::MissingFields(missing));
        }

        info!(
            origin = %request.origin,
            destination = %request.destination,
            budget = %request.budget,
            days = request.duration.days(),
            "planning trip"
        );

        let context = self.context.fetch(&request.destination).await;
        let prompt = build_prompt(request, &context);
        let itinerary = generate_itinerary(self.backend, &prompt).await?;

        Ok(PlanOutcome::Itinerary(itinerary))
    }
}
