use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::services::{extract_emails, extract_phones, fetch_page, PageSignals};

#[derive(Deserialize)]
pub struct UrlBody {
    pub url: String,
}

/// Fetches a page and returns the raw contact info found on it.
#[post("/scrape")]
async fn scrape_url(body: web::Json<UrlBody>) -> HttpResponse {
    let html_content = match fetch_page(&body.url).await {
        Ok(html_content) => html_content,
        Err(e) => {
            log::error!("Failed to fetch {}: {:?}", body.url, e);
            return HttpResponse::Ok().json(json!({ "error": "Failed to fetch URL" }));
        }
    };

    let signals = PageSignals::from_html(&html_content);
    let emails = extract_emails(&signals.text);
    let phones = extract_phones(&signals.text);

    HttpResponse::Ok().json(json!({
        "url": body.url,
        "emails": emails,
        "phones": phones,
    }))
}
