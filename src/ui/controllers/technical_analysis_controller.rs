use std::convert::Infallible;
use warp::reply::Response;
use warp::Reply;
use crate::structs::api_response::ApiResponse;
use crate::structs::technical_analysis_report::TechnicalAnalysisReport;
use crate::ui::pages;

pub async fn technical_analysis_handler() -> Result<Response, Infallible> {
    let page = pages::technical_analysis_page(TechnicalAnalysisReport::current());
    Ok(warp::reply::html(page).into_response())
}

pub async fn api_technical_analysis_handler() -> Result<Response, Infallible> {
    let body = ApiResponse::ok(TechnicalAnalysisReport::current());
    Ok(warp::reply::json(&body).into_response())
}
