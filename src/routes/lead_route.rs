use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    configuration::DedupSettings,
    domain::{deduplicate_leads, justify_score, score_lead, Lead, ScoredLead},
};

#[derive(Deserialize)]
pub struct LeadsBody {
    pub leads: Vec<Lead>,
}

/// Deduplicates one batch of leads and attaches a completeness score
/// with its justification to each surviving record.
#[post("/process_leads")]
async fn process_leads(
    dedup_settings: web::Data<DedupSettings>,
    body: web::Json<LeadsBody>,
) -> HttpResponse {
    let leads = body.into_inner().leads;
    log::info!("Processing a batch of {} leads", leads.len());

    let deduplicated = deduplicate_leads(leads, dedup_settings.closure);

    let processed_leads: Vec<ScoredLead> = deduplicated
        .into_iter()
        .map(|lead| {
            let (score, breakdown) = score_lead(&lead);
            let justification = justify_score(&breakdown);
            ScoredLead {
                lead,
                score,
                score_breakdown: breakdown,
                justification,
            }
        })
        .collect();

    HttpResponse::Ok().json(json!({ "processed_leads": processed_leads }))
}
