//! Lambda HTTP entry point for the projection engine
//!
//! POST a JSON `ProjectionRequest`; the response carries the outcome and
//! the chart-series descriptors for the frontend.

use lambda_http::{http::Method, run, service_fn, Body, Error, Request, Response};
use log::warn;
use plan_projection::scenario::bounds;
use plan_projection::{chart, Assumptions, ProjectionEngine, ProjectionRequest};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    outcome: plan_projection::ProjectionOutcome,
    chart: chart::ChartModel,
    issues: Vec<String>,
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    if event.method() != Method::POST {
        return json_response(405, r#"{"error":"POST a projection request"}"#.to_string());
    }

    let request: ProjectionRequest = match serde_json::from_slice(event.body().as_ref()) {
        Ok(request) => request,
        Err(err) => {
            warn!("rejected malformed request: {err}");
            return json_response(400, format!(r#"{{"error":"invalid request: {err}"}}"#));
        }
    };

    let assumptions = Assumptions::published();
    let issues: Vec<String> = bounds::check_request(&request, &assumptions)
        .iter()
        .map(|issue| issue.to_string())
        .collect();

    let engine = ProjectionEngine::new(assumptions);
    let outcome = engine.project(&request);
    let response = ProjectionResponse {
        chart: chart::chart_model(&outcome, request.product),
        outcome,
        issues,
    };

    json_response(200, serde_json::to_string(&response)?)
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
