use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http::header;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::AppState;
use crate::run::run_file;
use crate::scoring::Impact;

const MISSING_FIELDS: &str = "File, weights and impacts are required";
const COUNT_MISMATCH: &str = "Number of weights must equal number of impacts";
const BAD_IMPACT: &str = "Impacts must be + or -";

/// Fields collected from the multipart form.
#[derive(Debug, Default)]
struct TopsisForm {
    file_name: Option<String>,
    file: Option<Vec<u8>>,
    weights: Option<String>,
    impacts: Option<String>,
}

/// A form with every required field present and non-empty.
#[derive(Debug)]
struct TopsisRequest {
    file_name: String,
    file: Vec<u8>,
    weights: String,
    impacts: String,
}

impl TopsisForm {
    /// Request-level checks done before the table is even stored.
    fn check(self) -> Result<TopsisRequest, &'static str> {
        let (Some(file_name), Some(file), Some(weights), Some(impacts)) =
            (self.file_name, self.file, self.weights, self.impacts)
        else {
            return Err(MISSING_FIELDS);
        };
        if file_name.is_empty() || weights.is_empty() || impacts.is_empty() {
            return Err(MISSING_FIELDS);
        }

        let impact_tokens: Vec<&str> = impacts.split(',').collect();
        if weights.split(',').count() != impact_tokens.len() {
            return Err(COUNT_MISMATCH);
        }
        if impact_tokens.iter().any(|t| Impact::parse(t).is_none()) {
            return Err(BAD_IMPACT);
        }

        Ok(TopsisRequest {
            file_name,
            file,
            weights,
            impacts,
        })
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<TopsisForm, String> {
    let mut form = TopsisForm::default();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                form.file_name = field.file_name().map(str::to_string);
                form.file = Some(field.bytes().await.map_err(|e| e.to_string())?.to_vec());
            }
            Some("weights") => form.weights = Some(field.text().await.map_err(|e| e.to_string())?),
            Some("impacts") => form.impacts = Some(field.text().await.map_err(|e| e.to_string())?),
            _ => {}
        }
    }
    Ok(form)
}

/// Remove a per-request file; a missing file is not an error.
async fn discard(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove request file"),
    }
}

/// Keep only the final path component of a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("upload.csv")
        .to_string()
}

/// POST /topsis - score an uploaded table and return it as an attachment
pub async fn run_topsis(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "malformed multipart request");
            return (StatusCode::BAD_REQUEST, format!("Invalid form data: {}", e)).into_response();
        }
    };

    let request = match form.check() {
        Ok(request) => request,
        Err(message) => {
            warn!(reason = message, "rejected TOPSIS request");
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let name = sanitize_file_name(&request.file_name);
    let request_id = Uuid::new_v4();
    let input_path = state.upload_dir.join(format!("{}_{}", request_id, name));
    let output_path = state.result_dir.join(format!("result_{}_{}", request_id, name));

    if let Err(e) = tokio::fs::write(&input_path, &request.file).await {
        error!(path = %input_path.display(), error = %e, "failed to store upload");
        discard(&input_path).await;
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error storing upload: {}", e),
        )
            .into_response();
    }

    let columns = state.columns.clone();
    let job_input = input_path.clone();
    let job_output = output_path.clone();
    let job = tokio::task::spawn_blocking(move || {
        run_file(
            &job_input,
            &request.weights,
            &request.impacts,
            &job_output,
            &columns,
        )
    })
    .await;
    discard(&input_path).await;

    match job {
        Ok(Ok(ranked)) => {
            info!(%request_id, rows = ranked.results.len(), "TOPSIS request completed");
        }
        Ok(Err(e)) => {
            warn!(%request_id, kind = e.kind(), error = %e, "TOPSIS run failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error running TOPSIS: {}", e),
            )
                .into_response();
        }
        Err(e) => {
            error!(%request_id, error = %e, "TOPSIS task panicked");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error running TOPSIS: {}", e),
            )
                .into_response();
        }
    }

    let body = tokio::fs::read(&output_path).await;
    discard(&output_path).await;
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            error!(path = %output_path.display(), error = %e, "failed to read result");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading result: {}", e),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"result_{}\"", name.replace('"', "")),
            ),
        ],
        body,
    )
        .into_response()
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
