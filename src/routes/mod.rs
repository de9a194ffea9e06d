use actix_web::HttpResponse;
use actix_web::http::header;
use tera::{Context, Tera};

use crate::i18n::Locale;

pub mod api;
pub mod main;

/// Context shared by every page: locale tag and message catalog.
pub fn base_context(locale: Locale) -> Context {
    let mut context = Context::new();
    context.insert("lang", locale.tag());
    context.insert("messages", locale.messages());
    context
}

/// Renders `template` or answers 500 when Tera fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(header::ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
