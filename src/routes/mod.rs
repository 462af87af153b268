pub mod default_route;
pub mod export_route;
pub mod extract_route;
pub mod lead_route;
pub mod scrape_route;
