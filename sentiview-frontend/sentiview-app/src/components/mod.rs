pub mod loading;
pub mod product_card;
pub mod review_card;
pub mod search_box;
pub mod sentiment_badge;
pub mod skeleton;
pub mod star_rating;
