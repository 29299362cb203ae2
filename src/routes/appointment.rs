use actix_web::{HttpResponse, get, web};
use tracing::{error, warn};

use crate::error::AppError;
use crate::handlers::next_appointment::next_appointment;
use crate::models::query::AvailabilityQuery;
use crate::state::AppState;

/**
The scan runs as its own task and the response only waits for it up to the
watchdog. A scan that outlives the watchdog keeps going and still fills the
cache for the next caller.
*/
#[get("/next-appointment")]
async fn next(
    state: web::Data<AppState>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let watchdog = state.request_timeout;

    let task_state = state.clone();
    let scan = actix_web::rt::spawn(async move { next_appointment(&task_state, query).await });

    match tokio::time::timeout(watchdog, scan).await {
        Ok(Ok(Ok(result))) => Ok(HttpResponse::Ok().json(result)),
        Ok(Ok(Err(e))) => {
            error!("availability lookup failed: {}", e);
            Err(AppError::Upstream(e))
        }
        Ok(Err(e)) => {
            error!("availability task aborted: {}", e);
            Err(AppError::Internal(e.to_string()))
        }
        Err(_) => {
            warn!("next-appointment exceeded {:?}, answering 504", watchdog);
            Err(AppError::Timeout)
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(next);
}
