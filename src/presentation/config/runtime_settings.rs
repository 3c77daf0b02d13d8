/// Environment-backed settings reported by the health endpoint.
///
/// Read live at the point of use on every call. There is no cached
/// snapshot and no startup validation; unset variables come back as
/// empty strings.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub s3_endpoint: String,
    pub bucket: String,
    pub qdrant_url: String,
}

impl RuntimeSettings {
    pub fn from_env() -> Self {
        Self {
            s3_endpoint: std::env::var("S3_ENDPOINT").unwrap_or_default(),
            bucket: std::env::var("S3_BUCKET").unwrap_or_default(),
            qdrant_url: std::env::var("QDRANT_URL").unwrap_or_default(),
        }
    }
}
