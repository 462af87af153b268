use std::error::Error;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use serde::{Deserialize, Serialize};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const EXTRACTION_MODEL: &str = "qwen/qwen3-32b";
const MAX_HTML_CHARS: usize = 4000;

const SYSTEM_PROMPT: &str = r#"
You are a strict JSON extractor. Given raw webpage text or HTML, output ONLY a JSON object (no commentary, no backticks) that matches the schema:
{
  "company_name": string|null,
  "domain": string|null,
  "emails": [string],
  "phones": [string],
  "linkedin": string|null,
  "has_contact_page": boolean,
  "has_pricing": boolean,
  "intent_phrases": [string],
  "title": string|null,
  "raw_snippet": string|null,
  "industry": string|null,
  "tech_stack": [string]
}
Rules:
- If unsure about a field, use null or empty array.
- Never fabricate contact info.
- Keep values minimal (no paragraphs).
- For 'industry', provide a concise industry classification (e.g., 'Software as a Service (SaaS)', 'E-commerce', 'Healthcare').
- For 'tech_stack', list key technologies found on the page (e.g., 'React', 'Stripe', 'Google Analytics').
"#;

/// The extraction schema the model is asked for. Also the shape the
/// extract endpoint returns after merging in heuristic signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedLead {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub has_contact_page: bool,
    #[serde(default)]
    pub has_pricing: bool,
    #[serde(default)]
    pub intent_phrases: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub raw_snippet: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// Chat client for Groq's OpenAI-compatible API.
pub struct GroqClient {
    client: Client<OpenAIConfig>,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(GROQ_API_BASE);
        GroqClient {
            client: Client::with_config(config),
        }
    }

    pub async fn extract_lead_fields(
        &self,
        html_content: &str,
    ) -> Result<ExtractedLead, Box<dyn Error>> {
        let truncated: String = html_content.chars().take(MAX_HTML_CHARS).collect();

        let request = CreateChatCompletionRequestArgs::default()
            .model(EXTRACTION_MODEL)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(truncated)
                    .build()?
                    .into(),
            ])
            .temperature(0.0)
            .max_tokens(500_u32)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .ok_or("No choices in Groq response")?
            .message
            .content
            .clone()
            .ok_or("No content in Groq response")?;

        let extracted: ExtractedLead = serde_json::from_str(&content)?;
        Ok(extracted)
    }
}
