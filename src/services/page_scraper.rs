use std::time::Duration;

use scraper::{Html, Selector};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the raw HTML of a page. Non-2xx responses count as failures.
pub async fn fetch_page(url: &str) -> anyhow::Result<String> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let html_content = response.text().await?;

    Ok(html_content)
}

/// Signals read off a page in one parse. Owned data only, so the parsed
/// document never has to cross an await point.
pub struct PageSignals {
    pub text: String,
    pub title: Option<String>,
    pub has_contact_link: bool,
}

impl PageSignals {
    pub fn from_html(html_content: &str) -> Self {
        let document = Html::parse_document(html_content);
        let a_tag_selector = Selector::parse("a").unwrap();
        let title_selector = Selector::parse("title").unwrap();

        let text = document
            .root_element()
            .text()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<&str>>()
            .join(" ");

        let title = document
            .select(&title_selector)
            .next()
            .map(|tag| tag.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty());

        let has_contact_link = document.select(&a_tag_selector).any(|tag| {
            tag.value()
                .attr("href")
                .map(|href| href.to_lowercase().contains("contact"))
                .unwrap_or(false)
        });

        PageSignals {
            text,
            title,
            has_contact_link,
        }
    }
}

const PRICING_KEYWORDS: [&str; 4] = ["pricing", "plans", "subscribe", "buy now"];

/// True when the page text mentions any of the usual purchase-intent
/// phrases.
pub fn has_pricing_signal(text: &str) -> bool {
    let text = text.to_lowercase();
    PRICING_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
