use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Aggregate review sentiment for a product, as percentages of all reviews.
/// All three are zero for a product that has no analyzed reviews yet.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct Sentiment {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub avg_rating: f64,
    pub total_reviews: i32,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ProductList {
    pub success: bool,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
    pub products: Vec<Product>,
}
