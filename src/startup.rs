use std::net::TcpListener;

use actix_files::Files;
use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    configuration::DedupSettings,
    routes::{default_route, export_route, extract_route, lead_route, scrape_route},
    services::GroqClient,
};

pub fn run(
    listener: TcpListener,
    groq_client: GroqClient,
    dedup_settings: DedupSettings,
) -> Result<Server, std::io::Error> {
    let groq_client = Data::new(groq_client);
    let dedup_settings = Data::new(dedup_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(groq_client.clone())
            .app_data(dedup_settings.clone())
            .service(
                web::scope("/api")
                    .service(default_route::default)
                    .service(scrape_route::scrape_url)
                    .service(extract_route::extract_url)
                    .service(lead_route::process_leads)
                    .service(export_route::export_leads),
            )
            .service(Files::new("/", "./frontend").index_file("index.html").prefer_utf8(true))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
