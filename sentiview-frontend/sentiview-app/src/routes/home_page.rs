use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use sentiview_api_types::Product;

use crate::api::{get_recent_products, search_products};
use crate::components::loading::Loading;
use crate::components::product_card::ProductCard;
use crate::components::search_box::SearchBox;

/// One search interaction. Every submit walks Loading into one of the three
/// terminal states; the next submit starts over.
#[derive(Clone, PartialEq)]
enum SearchState {
    Idle,
    Loading,
    Loaded(Vec<Product>),
    Failed,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (state, set_state) = signal(SearchState::Idle);

    let on_search = Callback::new(move |query: String| {
        set_state(SearchState::Loading);
        spawn_local(async move {
            match search_products(&query).await {
                Ok(results) => set_state(SearchState::Loaded(results)),
                Err(e) => {
                    log::error!("search for '{query}' failed: {e}");
                    set_state(SearchState::Failed);
                }
            }
        });
    });

    view! {
        <Title text="Sentiview - Product Review Search" />
        <div class="main-content flex flex-col items-center gap-6 p-4">
            <h1 class="text-3xl font-bold mt-8 text-center">
                "Find products by what reviewers actually say"
            </h1>
            <SearchBox on_search />
            {move || match state() {
                SearchState::Idle => view! { <RecentProducts /> }.into_any(),
                SearchState::Loading => view! { <Loading /> }.into_any(),
                SearchState::Loaded(products) if products.is_empty() => {
                    view! {
                        <div class="panel rounded-lg p-6 text-center text-[color:var(--color-text-muted)] w-full max-w-xl">
                            "No products found. Try a different search term."
                        </div>
                    }
                        .into_any()
                }
                SearchState::Loaded(products) => {
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 w-full">
                            {products
                                .into_iter()
                                .map(|product| view! { <ProductCard product /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
                SearchState::Failed => {
                    view! {
                        <div class="rounded-lg p-6 text-center bg-red-500/10 border border-red-500/20 text-red-400 w-full max-w-xl">
                            "Something went wrong while searching. Please try again."
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Idle-state strip of the most recently updated products. Quietly renders
/// nothing if the backend can't provide them.
#[component]
fn RecentProducts() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match get_recent_products(8).await {
                Ok(list) => set_products(list),
                Err(e) => log::debug!("recent products unavailable: {e}"),
            }
        });
    });
    move || {
        let list = products();
        (!list.is_empty())
            .then(|| {
                view! {
                    <div class="w-full flex flex-col gap-3">
                        <h2 class="text-lg font-medium">"Recently updated"</h2>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            {list
                                .into_iter()
                                .map(|product| view! { <ProductCard product /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                }
            })
    }
}
