use common::error::AppError;
use lopdf::Document;

/// Validates that an uploaded file name ends in `.pdf`.
pub fn require_pdf_filename(file_name: Option<&str>) -> Result<(), AppError> {
    match file_name {
        Some(name) if name.ends_with(".pdf") => Ok(()),
        _ => Err(AppError::Format("Uploaded file is not a PDF.".to_string())),
    }
}

/// Extracts the text layer of every page, in page order, and trims the
/// final concatenation. A page without an extractable text layer
/// contributes an empty string rather than failing the whole document.
///
/// Parsing runs under `spawn_blocking` to keep the work off the async
/// executor.
pub async fn extract_pdf_text(pdf_bytes: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let document = Document::load_mem(&pdf_bytes)
            .map_err(|err| AppError::Format(format!("Failed to parse PDF: {err}")))?;

        let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        let mut text = String::new();
        for page in page_numbers {
            text.push_str(&document.extract_text(&[page]).unwrap_or_default());
        }

        Ok(text.trim().to_string())
    })
    .await??;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    #[test]
    fn accepts_pdf_extension() {
        assert!(require_pdf_filename(Some("report.pdf")).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(matches!(
            require_pdf_filename(Some("notes.txt")),
            Err(AppError::Format(_))
        ));
    }

    #[test]
    fn rejects_missing_filename() {
        assert!(matches!(
            require_pdf_filename(None),
            Err(AppError::Format(_))
        ));
    }

    #[tokio::test]
    async fn garbage_bytes_are_a_format_error() {
        let result = extract_pdf_text(b"definitely not a pdf".to_vec()).await;
        assert!(matches!(result, Err(AppError::Format(_))));
    }

    #[tokio::test]
    async fn extracts_text_from_a_single_page_document() {
        let bytes = one_page_pdf("Hello from the test document");
        let text = extract_pdf_text(bytes).await.unwrap();
        assert!(text.contains("Hello from the test document"), "got: {text}");
    }

    fn one_page_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}
