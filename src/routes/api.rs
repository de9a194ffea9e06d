use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::AttendeesParams;
use crate::services::ServiceError;
use crate::services::api::list_attendees;
use crate::source::AttendeeSource;

#[get("/v1/attendees")]
pub async fn api_v1_attendees(
    params: web::Query<AttendeesParams>,
    source: web::Data<dyn AttendeeSource>,
) -> impl Responder {
    match list_attendees(source.get_ref(), params.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Upstream(_)) => HttpResponse::BadGateway().finish(),
    }
}
