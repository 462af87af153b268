pub mod enricher;
pub mod exporter;
pub mod groq_client;
pub mod page_scraper;

pub use enricher::*;
pub use exporter::*;
pub use groq_client::*;
pub use page_scraper::*;
