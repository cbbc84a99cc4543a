//! Document metadata and server configuration.

/// Top-level metadata and server entry for the generated document.
///
/// The builder takes these as an argument rather than embedding literals, so the
/// defaults below are just that: defaults, overridable by callers without touching
/// the mapping logic.
#[derive(Debug, Clone)]
pub struct DocumentSettings {
    pub title: String,
    pub version: String,
    pub server_url: String,
    pub server_description: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            title: "PostgREST API".to_string(),
            version: "1.0.0".to_string(),
            server_url: "http://localhost:3005".to_string(),
            server_description: "Local PostgREST server".to_string(),
        }
    }
}
