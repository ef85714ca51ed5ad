use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sentiview_api_types::search::{SearchResults, Suggestions};
use sentiview_api_types::{Product, ProductList, ProductResponse, ReviewPage};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult, SystemError};

/// Query-string escaping: everything but the RFC 3986 unreserved set.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn escape(query: &str) -> String {
    utf8_percent_encode(query, QUERY).to_string()
}

fn search_path(query: &str) -> String {
    format!("/api/search?q={}", escape(query))
}

fn suggest_path(query: &str) -> String {
    format!("/api/autocomplete?q={}", escape(query))
}

pub(crate) async fn search_products(query: &str) -> AppResult<Vec<Product>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::EmptyQuery);
    }
    let response: SearchResults = fetch_api(&search_path(query)).await?;
    if response.success {
        Ok(response.results)
    } else {
        Err(AppError::Api(
            response.error.unwrap_or_else(|| "search failed".to_string()),
        ))
    }
}

pub(crate) async fn autocomplete(query: &str) -> AppResult<Vec<String>> {
    let response: Suggestions = fetch_api(&suggest_path(query)).await?;
    Ok(response.suggestions)
}

pub(crate) async fn get_product(product_id: i32) -> AppResult<Product> {
    let response: ProductResponse = fetch_api(&format!("/api/product/{product_id}")).await?;
    Ok(response.product)
}

pub(crate) async fn get_product_reviews(
    product_id: i32,
    sentiment: Option<&str>,
    limit: u32,
    offset: u32,
) -> AppResult<ReviewPage> {
    let mut path = format!("/api/product/{product_id}/reviews?limit={limit}&offset={offset}");
    if let Some(sentiment) = sentiment {
        path.push_str("&sentiment=");
        path.push_str(&escape(sentiment));
    }
    fetch_api(&path).await
}

pub(crate) async fn get_recent_products(limit: u32) -> AppResult<Vec<Product>> {
    let response: ProductList = fetch_api(&format!("/api/products?limit={limit}")).await?;
    Ok(response.products)
}

#[cfg(not(feature = "ssr"))]
async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    use leptos::prelude::on_cleanup;

    let abort_controller = web_sys::AbortController::new().ok();
    let abort_signal = abort_controller.as_ref().map(|a| a.signal());
    // abort the in-flight request if the owning scope is disposed,
    // i.e. the user navigated away mid-fetch
    on_cleanup(move || {
        if let Some(abort_controller) = abort_controller {
            abort_controller.abort()
        }
    });

    let json = gloo_net::http::Request::get(path)
        .abort_signal(abort_signal.as_ref())
        .send()
        .await
        .map_err(SystemError::from)?
        .text()
        .await
        .map_err(SystemError::from)?;
    serde_json::from_str(&json).map_err(|e| SystemError::from(e).into())
}

#[cfg(feature = "ssr")]
async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    let hostname =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5001".to_string());
    let url = format!("{hostname}{path}");
    let text = reqwest::get(&url)
        .await
        .map_err(SystemError::from)?
        .text()
        .await
        .map_err(SystemError::from)?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("{e}: {url} returned {text}");
        SystemError::from(e).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_are_escaped() {
        assert_eq!(
            search_path("wireless mouse"),
            "/api/search?q=wireless%20mouse"
        );
        assert_eq!(
            suggest_path("a&b=c"),
            "/api/autocomplete?q=a%26b%3Dc"
        );
        assert_eq!(search_path("éclair"), "/api/search?q=%C3%A9clair");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(escape("usb-c_2.4ghz~"), "usb-c_2.4ghz~");
    }
}
