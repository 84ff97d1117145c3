//! HTTP handler functions for the terror insights API.

use actix_web::{HttpResponse, web};
use terror_insights_analytics::FilterOutcome;
use terror_insights_dataset::options::day_options;
use terror_insights_incident_models::{ChartDimension, Month};
use terror_insights_server_models::{
    AggregateRequest, ApiHealth, ApiOption, ApiOptions, ChartRequest, FilterRequest,
    MonthSelectionRequest, SelectionRequest,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/summary`
pub async fn summary(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.summary())
}

/// `GET /api/options`
///
/// Returns the options for every dropdown that does not depend on another
/// selection.
pub async fn options(state: web::Data<AppState>) -> HttpResponse {
    let dataset = &state.dataset;

    HttpResponse::Ok().json(ApiOptions {
        regions: dataset.regions().to_vec(),
        attack_types: dataset.attack_types().to_vec(),
        years: dataset.years().to_vec(),
        months: Month::all().iter().copied().map(ApiOption::from).collect(),
        dimensions: ChartDimension::all()
            .iter()
            .copied()
            .map(ApiOption::from)
            .collect(),
    })
}

/// `POST /api/options/countries`
pub async fn countries(
    state: web::Data<AppState>,
    body: web::Json<SelectionRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.countries_for(&body.selected))
}

/// `POST /api/options/subregions`
pub async fn subregions(
    state: web::Data<AppState>,
    body: web::Json<SelectionRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.subregions_for(&body.selected))
}

/// `POST /api/options/localities`
pub async fn localities(
    state: web::Data<AppState>,
    body: web::Json<SelectionRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.localities_for(&body.selected))
}

/// `POST /api/options/days`
pub async fn days(body: web::Json<MonthSelectionRequest>) -> HttpResponse {
    HttpResponse::Ok().json(day_options(&body.selected))
}

/// `POST /api/filter-data`
///
/// Returns every incident matching the criteria. An empty array means
/// nothing matched.
pub async fn filter_data(
    state: web::Data<AppState>,
    body: web::Json<FilterRequest>,
) -> HttpResponse {
    let outcome = FilterOutcome::of(&state.dataset, &body);
    if outcome == FilterOutcome::NoData {
        log::debug!("No incidents match {:?}", *body);
    }
    HttpResponse::Ok().json(outcome.into_matches())
}

/// `POST /api/aggregate`
///
/// Aggregates the records supplied in the body.
pub async fn aggregate(body: web::Json<AggregateRequest>) -> HttpResponse {
    let request = body.into_inner();
    HttpResponse::Ok().json(terror_insights_analytics::aggregate(
        &request.records,
        request.dimension,
        request.search_text.as_deref(),
    ))
}

/// `POST /api/chart`
///
/// Filters the dataset by the chart's year window and scope, then
/// aggregates the result.
pub async fn chart(state: web::Data<AppState>, body: web::Json<ChartRequest>) -> HttpResponse {
    HttpResponse::Ok().json(terror_insights_analytics::chart(&state.dataset, &body))
}
