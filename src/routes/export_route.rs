use actix_web::{post, web, HttpResponse};

use crate::{routes::lead_route::LeadsBody, services::leads_to_csv};

/// Renders a batch of leads as a CSV attachment.
#[post("/export_leads")]
async fn export_leads(body: web::Json<LeadsBody>) -> HttpResponse {
    match leads_to_csv(&body.leads) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header(("Content-Disposition", "attachment; filename=leads.csv"))
            .body(rendered),
        Err(e) => {
            log::error!("Failed to render leads csv: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
