use actix_web::{post, web, HttpResponse};
use itertools::Itertools;
use serde_json::json;
use url::Url;

use crate::{
    routes::scrape_route::UrlBody,
    services::{
        extract_emails, extract_phones, fetch_page, has_pricing_signal, ExtractedLead, GroqClient,
        PageSignals,
    },
};

/// Fetches a page and extracts structured lead fields with the LLM,
/// merged conservatively with heuristic page signals. An LLM failure
/// degrades to heuristics only.
#[post("/extract")]
async fn extract_url(groq_client: web::Data<GroqClient>, body: web::Json<UrlBody>) -> HttpResponse {
    let html_content = match fetch_page(&body.url).await {
        Ok(html_content) => html_content,
        Err(e) => {
            log::error!("Failed to fetch {}: {:?}", body.url, e);
            return HttpResponse::Ok().json(json!({ "error": "Failed to fetch URL" }));
        }
    };

    let extracted = match groq_client.extract_lead_fields(&html_content).await {
        Ok(extracted) => extracted,
        Err(e) => {
            log::error!("Error during LLM extraction: {:?}", e);
            ExtractedLead::default()
        }
    };

    let signals = PageSignals::from_html(&html_content);
    let heuristic_emails = extract_emails(&signals.text);
    let heuristic_phones = extract_phones(&signals.text);
    let has_pricing = has_pricing_signal(&signals.text);

    let data = ExtractedLead {
        company_name: extracted.company_name,
        domain: extracted.domain.or_else(|| domain_from_url(&body.url)),
        emails: merge_sorted(extracted.emails, heuristic_emails),
        phones: merge_sorted(extracted.phones, heuristic_phones),
        linkedin: extracted.linkedin,
        has_contact_page: extracted.has_contact_page || signals.has_contact_link,
        has_pricing: extracted.has_pricing || has_pricing,
        intent_phrases: extracted.intent_phrases,
        title: extracted.title.or(signals.title),
        raw_snippet: extracted.raw_snippet,
        industry: extracted.industry,
        tech_stack: extracted.tech_stack,
    };

    HttpResponse::Ok().json(json!({
        "url": body.url,
        "data": data,
    }))
}

fn merge_sorted(llm_values: Vec<String>, heuristic_values: Vec<String>) -> Vec<String> {
    llm_values
        .into_iter()
        .chain(heuristic_values)
        .unique()
        .sorted_unstable()
        .collect()
}

fn domain_from_url(url: &str) -> Option<String> {
    let parsed_url = Url::parse(url).ok()?;
    let host = parsed_url.host_str()?;
    match host.strip_prefix("www.") {
        Some(stripped) => Some(stripped.to_string()),
        None => Some(host.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{domain_from_url, merge_sorted};

    #[test]
    fn domain_from_url_strips_www() {
        assert_eq!(
            domain_from_url("https://www.acme.com/pricing"),
            Some("acme.com".to_string())
        );
        assert_eq!(
            domain_from_url("https://beta.org"),
            Some("beta.org".to_string())
        );
        assert_eq!(domain_from_url("not a url"), None);
    }

    #[test]
    fn merge_sorted_unions_and_orders() {
        let merged = merge_sorted(
            vec!["b@acme.com".to_string(), "a@acme.com".to_string()],
            vec!["a@acme.com".to_string(), "c@acme.com".to_string()],
        );

        assert_eq!(merged, vec!["a@acme.com", "b@acme.com", "c@acme.com"]);
    }
}
