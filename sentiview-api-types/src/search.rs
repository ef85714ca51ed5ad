use serde::{Deserialize, Serialize};

use crate::Product;

/// Response of `GET /api/search?q=`. On failure the backend sets
/// `success: false` and puts a human-readable message in `error`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SearchResults {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<Product>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /api/autocomplete?q=`: product names matching the typed
/// prefix, ordered by review count.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_match_backend_shape() {
        let json = r#"{
            "success": true,
            "results": [{
                "id": 42,
                "name": "Aurora Wireless Earbuds",
                "description": "Noise cancelling, 30h battery",
                "category": "Electronics",
                "image_url": "https://img.example/aurora.jpg",
                "avg_rating": 4.31,
                "total_reviews": 1289,
                "sentiment": {"positive": 71.5, "neutral": 18.0, "negative": 10.5},
                "updated_at": "2024-06-01T08:30:12.412000"
            }]
        }"#;
        let parsed: SearchResults = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.results.len(), 1);
        let product = &parsed.results[0];
        assert_eq!(product.name, "Aurora Wireless Earbuds");
        assert_eq!(product.sentiment.positive, 71.5);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn failed_search_carries_error() {
        let parsed: SearchResults =
            serde_json::from_str(r#"{"success": false, "error": "Search failed"}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.results.is_empty());
        assert_eq!(parsed.error.as_deref(), Some("Search failed"));
    }

    #[test]
    fn suggestions_deserialize() {
        let parsed: Suggestions =
            serde_json::from_str(r#"{"suggestions": ["mouse", "mouse pad"]}"#).unwrap();
        assert_eq!(parsed.suggestions, vec!["mouse", "mouse pad"]);
    }
}
