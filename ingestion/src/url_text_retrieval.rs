use common::error::AppError;
use scraper::Html;
use tracing::info;

/// Fetches `url` and returns the visible text of the response body.
///
/// Fails with `AppError::Fetch` when the request cannot complete or the
/// remote server answers with a non-success status.
pub async fn extract_text_from_url(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, AppError> {
    let parsed =
        url::Url::parse(url).map_err(|_| AppError::Validation("Invalid URL".to_string()))?;
    ensure_supported_scheme(&parsed)?;

    info!(%url, "Fetching URL");

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|err| AppError::Fetch(format!("Failed to fetch URL: {err}")))?
        .error_for_status()
        .map_err(|err| AppError::Fetch(format!("URL returned an error status: {err}")))?;

    let body = response
        .text()
        .await
        .map_err(|err| AppError::Fetch(format!("Failed to read response body: {err}")))?;

    Ok(visible_text(&body))
}

/// Concatenates every non-empty, whitespace-trimmed text node of the
/// markup in document order, separated by single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn ensure_supported_scheme(url: &url::Url) -> Result<(), AppError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::Validation(format!(
            "Unsupported URL scheme: {scheme}"
        ))),
    }
}
