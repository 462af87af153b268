use serde::Serialize;

use crate::domain::Lead;

/// Per-category points behind a lead's completeness score. The category
/// names are historical labels kept for downstream compatibility:
/// "revenue" is driven by phone presence, not revenue data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contact: u32,
    pub revenue: u32,
    pub industry: u32,
    pub intent: u32,
    pub crosscheck: u32,
}

impl ScoreBreakdown {
    /// Categories in rubric order.
    pub fn entries(&self) -> [(&'static str, u32); 5] {
        [
            ("contact", self.contact),
            ("revenue", self.revenue),
            ("industry", self.industry),
            ("intent", self.intent),
            ("crosscheck", self.crosscheck),
        ]
    }

    pub fn total(&self) -> u32 {
        self.entries().into_iter().map(|(_, points)| points).sum()
    }
}

/// A lead with its completeness score attached. Serializes as the lead's
/// own shape plus `score`, `score_breakdown` and `justification`.
#[derive(Debug, Serialize)]
pub struct ScoredLead {
    #[serde(flatten)]
    pub lead: Lead,
    pub score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub justification: String,
}

/// Scores a lead 0-100 on data completeness with a fixed rubric. The
/// rubric sums to exactly 100, so the cap only guards future edits.
pub fn score_lead(lead: &Lead) -> (u32, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        contact: if lead.emails.is_empty() { 0 } else { 35 },
        revenue: if lead.phones.is_empty() { 0 } else { 25 },
        industry: if lead.has_linkedin() { 15 } else { 0 },
        intent: if lead.has_pricing.unwrap_or(false) { 15 } else { 0 },
        crosscheck: if lead.has_contact_page.unwrap_or(false) { 10 } else { 0 },
    };

    (breakdown.total().min(100), breakdown)
}

/// Renders a breakdown into one deterministic sentence, e.g.
/// `Justification: has contact, revenue; missing industry, intent, crosscheck.`
pub fn justify_score(breakdown: &ScoreBreakdown) -> String {
    let mut present: Vec<&str> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();
    for (category, points) in breakdown.entries() {
        match points > 0 {
            true => present.push(category),
            false => missing.push(category),
        }
    }

    let mut parts: Vec<String> = Vec::new();
    if !present.is_empty() {
        parts.push(format!("has {}", present.join(", ")));
    }
    if !missing.is_empty() {
        parts.push(format!("missing {}", missing.join(", ")));
    }

    // Unreachable while the rubric has categories, but the renderer
    // stays total.
    match parts.is_empty() {
        true => "Justification: insufficient data.".to_string(),
        false => format!("Justification: {}.", parts.join("; ")),
    }
}
