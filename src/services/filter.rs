//! List filter builder
//!
//! Filters are plain field→value pairs appended to list requests as query
//! parameters. Values are percent-encoded when the query string is built.

/// Query filter for collection requests
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    params: Vec<(String, String)>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter showing only records whose active flag is set
    pub fn active_only() -> Self {
        Self::new().by("is_active", "true")
    }

    /// Add a field→value condition
    pub fn by(mut self, field: &str, value: impl ToString) -> Self {
        self.params.push((field.to_string(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Build the query string, empty or `?`-prefixed
    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .params
            .iter()
            .map(|(field, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(field),
                    urlencoding::encode(value)
                )
            })
            .collect();
        format!("?{}", encoded.join("&"))
    }
}
