use actix_web::{HttpRequest, Responder, get, web};
use chrono::Utc;
use tera::Tera;

use crate::directory::location::Location;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};
use crate::services::main::load_index_page;
use crate::source::AttendeeSource;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    source: web::Data<dyn AttendeeSource>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let location = Location::from_parts(req.path(), req.query_string());
    let locale = server_config.locale;

    let page = load_index_page(source.get_ref(), location, locale, Utc::now()).await;

    let mut context = base_context(locale);
    context.insert("current_page", "attendees");
    context.insert("directory", &page);

    render_template(&tera, "main/index.html", &context)
}
