use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Metadata attached to data responses.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub generated_at: String,
    pub source: &'static str,
}

impl ResponseMeta {
    pub fn new(source: &'static str) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            source,
        }
    }
}
