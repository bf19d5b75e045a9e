/// One multipart file part, decoupled from the HTTP extractor.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
    /// Attach to this land when provided as a form field.
    pub land_id: Option<i64>,
}
