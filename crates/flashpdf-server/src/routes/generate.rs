use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use flashpdf_core::models::word::parse_word_list;
use flashpdf_export::build_document;
use flashpdf_export::styles::{DocumentStyles, ExampleLayout};

use crate::error::ApiError;
use crate::page::render_index;
use crate::state::AppState;

/// Fixed label after the date in the download name.
pub const FILE_SUFFIX: &str = "styled_words";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// `<YYMMDD>_styled_words.pdf`
pub fn download_filename(date: jiff::civil::Date) -> String {
    format!("{}_{FILE_SUFFIX}.pdf", date.strftime("%y%m%d"))
}

struct Upload {
    json: Vec<u8>,
    layout: Option<ExampleLayout>,
}

/// Turn an uploaded word list into a PDF download.
///
/// Any processing failure re-renders the form with a single error message.
pub async fn generate_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    match build_download(&state, &mut multipart).await {
        Ok(response) => Ok(response),
        Err(ApiError::Processing(message)) => {
            tracing::warn!(error = %message, "PDF generation failed");
            let page = render_index(&state.pages, Some(&message))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn build_download(state: &AppState, multipart: &mut Multipart) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;
    let records = parse_word_list(&upload.json)?;

    let mut styles = DocumentStyles::clone(&state.styles);
    if let Some(layout) = upload.layout {
        styles.example_layout = layout;
    }

    let pdf = tokio::task::spawn_blocking(move || build_document(&records, &styles))
        .await??;

    let filename = download_filename(jiff::Zoned::now().date());
    tracing::info!(%filename, bytes = pdf.len(), "serving PDF download");

    let headers = [
        (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, pdf).into_response())
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    let mut json = None;
    let mut layout = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    json = Some(bytes.to_vec());
                }
            }
            "layout" => {
                let value = field.text().await?;
                if !value.trim().is_empty() {
                    layout = Some(value.parse::<ExampleLayout>()?);
                }
            }
            _ => {}
        }
    }

    let json = json.ok_or_else(|| ApiError::Processing("no JSON file was uploaded".to_string()))?;
    Ok(Upload { json, layout })
}
