//! Guest list downloads.
//!
//! Both formats export the complete list in record order with a
//! timestamped filename; neither consults the cache TTL beyond what the
//! store wrapper already does.

use axum::{
    extract::State,
    http::{header, HeaderName},
};
use chrono::Utc;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::export::{export_filename, guests_to_csv, guests_to_xlsx};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

type Download = ([(HeaderName, String); 2], Vec<u8>);

/// Download the guest list as CSV.
///
/// GET /api/v1/export/csv (admin)
pub async fn export_csv(State(state): State<AppState>) -> Result<Download, ApiError> {
    let guests = state.store.list_all().await?;
    let data = guests_to_csv(&guests)?;
    Ok(download_response("text/csv", "csv", data))
}

/// Download the guest list as an Excel workbook.
///
/// GET /api/v1/export/xlsx (admin)
pub async fn export_xlsx(State(state): State<AppState>) -> Result<Download, ApiError> {
    let guests = state.store.list_all().await?;
    let data = guests_to_xlsx(&guests)?;
    Ok(download_response(XLSX_CONTENT_TYPE, "xlsx", data))
}

fn download_response(content_type: &str, extension: &str, data: Vec<u8>) -> Download {
    let filename = export_filename(extension, Utc::now());
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        data,
    )
}
