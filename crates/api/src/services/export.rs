//! Guest list export.
//!
//! Renders the full guest list as CSV or as an Excel workbook with a single
//! "Guest List" sheet. Column order matches the record layout in both
//! formats; filenames carry the generation timestamp.

use chrono::{DateTime, Utc};
use domain::models::Guest;
use rust_xlsxwriter::Workbook;
use thiserror::Error;

/// Export columns, in record order. Used as the CSV header row and the
/// sheet header row.
pub const EXPORT_COLUMNS: [&str; 13] = [
    "id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "address_line1",
    "address_line2",
    "city",
    "state",
    "zip_code",
    "country",
    "rsvp_status",
    "submission_date",
];

/// Sheet name in the Excel export.
pub const SHEET_NAME: &str = "Guest List";

/// Export generation errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV generation failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export buffer error: {0}")]
    Buffer(String),
}

fn record_fields(guest: &Guest) -> [String; 13] {
    [
        guest.id.to_string(),
        guest.first_name.clone(),
        guest.last_name.clone(),
        guest.email.clone().unwrap_or_default(),
        guest.phone.clone().unwrap_or_default(),
        guest.address_line1.clone(),
        guest.address_line2.clone().unwrap_or_default(),
        guest.city.clone(),
        guest.state.clone(),
        guest.zip_code.clone(),
        guest.country.clone(),
        guest.rsvp_status.clone(),
        guest.submission_date.to_rfc3339(),
    ]
}

/// Renders the guest list as CSV: header row, one line per record.
pub fn guests_to_csv(guests: &[Guest]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_COLUMNS)?;
    for guest in guests {
        writer.write_record(record_fields(guest))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Renders the guest list as an xlsx workbook with a "Guest List" sheet.
pub fn guests_to_xlsx(guests: &[Guest]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, guest) in guests.iter().enumerate() {
        for (col, value) in record_fields(guest).iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// `wedding_guests_{YYYYmmdd_HHMMSS}.{ext}` for the download headers.
pub fn export_filename(extension: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "wedding_guests_{}.{}",
        generated_at.format("%Y%m%d_%H%M%S"),
        extension
    )
}
