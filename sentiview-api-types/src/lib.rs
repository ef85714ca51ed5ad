mod product;
mod review;

pub mod search;

pub use product::{Product, ProductList, ProductResponse, Sentiment};
pub use review::{Review, ReviewPage, ReviewSentiment};
