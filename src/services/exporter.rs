use anyhow::anyhow;
use serde_json::Value;

use crate::domain::Lead;

const CSV_HEADER: [&str; 13] = [
    "id",
    "company_name",
    "domain",
    "emails",
    "phones",
    "linkedin",
    "has_contact_page",
    "has_pricing",
    "estimated_revenue",
    "score",
    "score_breakdown",
    "justification",
    "source_urls",
];

/// Renders leads as CSV with the export header downstream sheets expect.
/// Score fields and `estimated_revenue` are not part of the typed lead
/// shape, so they are read from the record's extra keys when present.
pub fn leads_to_csv(leads: &[Lead]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(CSV_HEADER)?;

    for (id, lead) in leads.iter().enumerate() {
        writer.write_record(&[
            id.to_string(),
            lead.company_name.clone().unwrap_or_default(),
            lead.domain.clone().unwrap_or_default(),
            lead.emails.join(","),
            lead.phones.join(","),
            lead.linkedin.clone().unwrap_or_default(),
            lead.has_contact_page.map(|b| b.to_string()).unwrap_or_default(),
            lead.has_pricing.map(|b| b.to_string()).unwrap_or_default(),
            extra_field(lead, "estimated_revenue"),
            extra_field(lead, "score"),
            extra_field(lead, "score_breakdown"),
            extra_field(lead, "justification"),
            lead.source_urls.join(","),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush csv writer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn extra_field(lead: &Lead, key: &str) -> String {
    match lead.extra.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::leads_to_csv;
    use crate::domain::Lead;

    #[test]
    fn renders_header_and_rows() {
        let mut lead = Lead {
            company_name: Some("Acme".to_string()),
            domain: Some("acme.com".to_string()),
            emails: vec!["a@acme.com".to_string(), "b@acme.com".to_string()],
            source_urls: vec!["acme.com".to_string()],
            has_pricing: Some(true),
            ..Default::default()
        };
        lead.extra
            .insert("score".to_string(), serde_json::json!(85));
        lead.extra.insert(
            "justification".to_string(),
            serde_json::json!("Justification: has contact."),
        );

        let rendered = leads_to_csv(&[lead]).unwrap();
        let mut lines = rendered.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("id,company_name,domain"));
        assert!(header.ends_with("source_urls"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("0,Acme,acme.com"));
        assert!(row.contains("\"a@acme.com,b@acme.com\""));
        assert!(row.contains("85"));
        assert!(row.contains("Justification: has contact."));
    }

    #[test]
    fn empty_batch_renders_header_only() {
        let rendered = leads_to_csv(&[]).unwrap();

        assert_eq!(rendered.lines().count(), 1);
    }
}
