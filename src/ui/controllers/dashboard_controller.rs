use std::collections::HashMap;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::errors::QuantiaResult;
use crate::structs::analysis_query::AnalysisQuery;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::api_response::ApiResponse;
use crate::ui::app_state::AppState;
use crate::ui::pages;

fn resolve_query(params: &HashMap<String, String>, defaults: &AnalysisQuery) -> QuantiaResult<AnalysisQuery> {
    AnalysisQuery::from_params(
        params.get("topic").map(String::as_str),
        params.get("limit").map(String::as_str),
        defaults,
    )
}

pub async fn dashboard_handler(params: HashMap<String, String>, state: AppState) -> Result<Response, Infallible> {
    let page = match resolve_query(&params, &state.defaults) {
        Ok(query) => {
            let outcome = state.source.fetch_analysis(&query).await;
            pages::dashboard_page(query.topic(), &query.limit().to_string(), &outcome)
        }
        Err(e) => {
            // Bad input never reaches the analysis service.
            let topic = params.get("topic").map_or(state.defaults.topic(), String::as_str);
            let limit = params.get("limit").cloned().unwrap_or_else(|| state.defaults.limit().to_string());
            pages::dashboard_page(topic, &limit, &ProxyOutcome::failure(e.short_message()))
        }
    };

    Ok(warp::reply::html(page).into_response())
}

pub async fn api_analysis_handler(params: HashMap<String, String>, state: AppState) -> Result<Response, Infallible> {
    let query = match resolve_query(&params, &state.defaults) {
        Ok(query) => query,
        Err(e) => {
            let body = ApiResponse::<AnalysisResult>::error(e.short_message());
            return Ok(warp::reply::with_status(warp::reply::json(&body), StatusCode::BAD_REQUEST).into_response());
        }
    };

    let outcome = state.source.fetch_analysis(&query).await;
    let status = if outcome.is_success() { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    let body = ApiResponse::from(outcome);

    Ok(warp::reply::with_status(warp::reply::json(&body), status).into_response())
}
