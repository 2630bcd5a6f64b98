pub mod pdf_ingestion;
pub mod url_text_retrieval;
