use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A company lead assembled from independent web scrapes. Every field is
/// optional: a scrape may only surface a name, or only contact details.
/// Keys we don't model are kept in `extra` and travel with the record
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_contact_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_pricing: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lead {
    /// Contact-info density, used to pick the primary record of a merge
    /// group.
    pub fn contact_count(&self) -> usize {
        self.emails.len() + self.phones.len()
    }

    pub fn has_linkedin(&self) -> bool {
        match self.linkedin.as_deref() {
            Some(profile) => !profile.is_empty(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lead;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let lead: Lead = serde_json::from_str("{}").unwrap();

        assert_eq!(lead.company_name, None);
        assert!(lead.emails.is_empty());
        assert!(lead.phones.is_empty());
        assert!(lead.source_urls.is_empty());
        assert_eq!(lead.has_pricing, None);
        assert!(lead.extra.is_empty());
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let raw = r#"{"company_name": "Acme", "estimated_revenue": "1M", "tags": ["saas"]}"#;
        let lead: Lead = serde_json::from_str(raw).unwrap();

        assert_eq!(lead.extra.get("estimated_revenue").unwrap(), "1M");

        let serialized = serde_json::to_value(&lead).unwrap();
        assert_eq!(serialized["estimated_revenue"], "1M");
        assert_eq!(serialized["tags"][0], "saas");
        // Absent optional fields must not reappear as nulls.
        assert!(serialized.get("domain").is_none());
        assert!(serialized.get("emails").is_none());
    }

    #[test]
    fn contact_count_sums_emails_and_phones() {
        let lead = Lead {
            emails: vec!["a@acme.com".to_string(), "b@acme.com".to_string()],
            phones: vec!["123".to_string()],
            ..Default::default()
        };

        assert_eq!(lead.contact_count(), 3);
    }

    #[test]
    fn empty_linkedin_counts_as_absent() {
        let lead = Lead {
            linkedin: Some("".to_string()),
            ..Default::default()
        };

        assert!(!lead.has_linkedin());
    }
}
