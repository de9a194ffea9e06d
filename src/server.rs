//! HTTP server bootstrap.

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::routes::api::api_v1_attendees;
use crate::routes::main::show_index;
use crate::source::AttendeeSource;
use crate::source::http::HttpAttendeeSource;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let event_id = server_config
        .event_id()
        .map_err(|e| std::io::Error::other(format!("Invalid event id: {e}")))?;

    // One pooled HTTP client shared by every request handler.
    let source = HttpAttendeeSource::new(
        server_config.api_base_url.clone(),
        event_id,
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build attendee source: {e}")))?;
    let source: Arc<dyn AttendeeSource> = Arc::new(source);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Listing attendees of event {event_id} from {}",
        server_config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_attendees))
            .service(show_index)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(source.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
