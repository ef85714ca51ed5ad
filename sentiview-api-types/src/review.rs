use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-review sentiment as scored by the backend's analyzer.
/// `score` is in [-1, 1], `label` is "positive"/"neutral"/"negative".
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ReviewSentiment {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Review {
    pub id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub review_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub helpful_count: i32,
    #[serde(default)]
    pub sentiment: ReviewSentiment,
    #[serde(default)]
    pub source: Option<String>,
}

/// One page of a product's reviews, as served by
/// `GET /api/product/<id>/reviews`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ReviewPage {
    pub success: bool,
    pub product_id: i32,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
    pub reviews: Vec<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_page_matches_backend_shape() {
        let json = r#"{
            "success": true,
            "product_id": 3,
            "total": 1,
            "limit": 20,
            "offset": 0,
            "reviews": [{
                "id": 17,
                "title": "Great value",
                "text": "Battery easily lasts two days.",
                "rating": 4.5,
                "author": "Priya",
                "is_verified": true,
                "review_date": "2024-03-05T10:15:00",
                "helpful_count": 12,
                "sentiment": {"score": 0.82, "label": "positive", "confidence": 0.91},
                "source": "amazon"
            }]
        }"#;
        let page: ReviewPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.product_id, 3);
        let review = &page.reviews[0];
        assert!(review.is_verified);
        assert_eq!(review.sentiment.label.as_deref(), Some("positive"));
        assert_eq!(
            review.review_date.unwrap().format("%Y-%m-%d").to_string(),
            "2024-03-05"
        );
    }

    #[test]
    fn null_fields_deserialize() {
        let json = r#"{
            "id": 1,
            "title": null,
            "text": null,
            "rating": null,
            "author": null,
            "is_verified": false,
            "review_date": null,
            "helpful_count": 0,
            "sentiment": {"score": null, "label": null, "confidence": null},
            "source": null
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(review.review_date.is_none());
        assert!(review.sentiment.score.is_none());
    }
}
