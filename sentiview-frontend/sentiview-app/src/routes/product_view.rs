use icondata as i;
use leptos::{prelude::*, task::spawn_local};
use leptos_icons::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use sentiview_api_types::{Product, Review, Sentiment};
use thousands::Separable;

use crate::api::{get_product, get_product_reviews};
use crate::components::review_card::ReviewCard;
use crate::components::sentiment_badge::SentimentBadge;
use crate::components::skeleton::BoxSkeleton;
use crate::components::star_rating::StarRating;

const REVIEW_PAGE_SIZE: u32 = 20;

const FILTERS: [(&str, Option<&str>); 4] = [
    ("All", None),
    ("Positive", Some("positive")),
    ("Neutral", Some("neutral")),
    ("Negative", Some("negative")),
];

#[derive(Clone, PartialEq)]
enum ProductState {
    Loading,
    Loaded(Box<Product>),
    Missing,
}

#[component]
pub fn ProductView() -> impl IntoView {
    let params = use_params_map();
    let product_id =
        Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<i32>().ok())));

    let (product, set_product) = signal(ProductState::Loading);
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (review_total, set_review_total) = signal(0i64);
    let (filter, set_filter) = signal(None::<&'static str>);

    Effect::new(move |_| {
        let Some(id) = product_id() else {
            set_product(ProductState::Missing);
            return;
        };
        set_product(ProductState::Loading);
        spawn_local(async move {
            match get_product(id).await {
                Ok(p) => set_product(ProductState::Loaded(Box::new(p))),
                Err(e) => {
                    log::error!("loading product {id} failed: {e}");
                    set_product(ProductState::Missing);
                }
            }
        });
    });

    Effect::new(move |_| {
        let Some(id) = product_id() else {
            return;
        };
        let sentiment = filter();
        spawn_local(async move {
            match get_product_reviews(id, sentiment, REVIEW_PAGE_SIZE, 0).await {
                Ok(page) => {
                    set_review_total(page.total);
                    set_reviews(page.reviews);
                }
                Err(e) => {
                    log::error!("loading reviews for product {id} failed: {e}");
                    set_review_total(0);
                    set_reviews(Vec::new());
                }
            }
        });
    });

    view! {
        <div class="main-content flex flex-col items-center gap-6 p-4">
            {move || match product() {
                ProductState::Loading => {
                    view! {
                        <div class="w-full max-w-3xl">
                            <BoxSkeleton />
                        </div>
                    }
                        .into_any()
                }
                ProductState::Loaded(product) => {
                    view! { <ProductHeader product=*product /> }.into_any()
                }
                ProductState::Missing => {
                    view! {
                        <div class="rounded-lg p-6 text-center bg-red-500/10 border border-red-500/20 text-red-400 w-full max-w-xl">
                            "This product could not be loaded."
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="flex flex-col gap-3 w-full max-w-3xl">
                <div class="flex flex-row items-center gap-3 flex-wrap">
                    <h2 class="text-lg font-medium">"Reviews"</h2>
                    <span class="text-sm text-[color:var(--color-text-muted)]">
                        {move || review_total().separate_with_commas()}
                    </span>
                    <div class="flex flex-row gap-1 ml-auto">
                        {FILTERS
                            .map(|(label, value)| {
                                let active = move || filter() == value;
                                view! {
                                    <button
                                        type="button"
                                        class="btn text-xs"
                                        class:btn-active=active
                                        on:click=move |_| set_filter(value)
                                    >
                                        {label}
                                    </button>
                                }
                            })}
                    </div>
                </div>
                {move || {
                    if reviews.with(|r| r.is_empty()) {
                        view! {
                            <div class="panel rounded-lg p-6 text-center text-[color:var(--color-text-muted)]">
                                "No reviews for this filter."
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="flex flex-col gap-3">
                                {reviews()
                                    .into_iter()
                                    .map(|review| view! { <ReviewCard review /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductHeader(product: Product) -> impl IntoView {
    let image = match product.image_url.clone() {
        Some(url) => view! {
            <img
                src=url
                alt=product.name.clone()
                class="w-48 h-48 object-contain bg-white/5 rounded-lg"
            />
        }
        .into_any(),
        None => view! {
            <div class="w-48 h-48 flex items-center justify-center bg-white/5 rounded-lg text-[color:var(--color-text-muted)]">
                <Icon icon=i::BsImage width="3em" height="3em" />
            </div>
        }
        .into_any(),
    };
    view! {
        <Title text=format!("{} - Sentiview", product.name) />
        <div class="panel rounded-lg p-6 flex flex-col md:flex-row gap-6 w-full max-w-3xl">
            {image}
            <div class="flex flex-col gap-2">
                <h1 class="text-2xl font-bold">{product.name.clone()}</h1>
                {product
                    .category
                    .clone()
                    .map(|category| {
                        view! {
                            <span class="text-sm text-[color:var(--color-text-muted)]">
                                {category}
                            </span>
                        }
                    })}
                <div class="flex flex-row items-center gap-2 flex-wrap">
                    <StarRating rating=product.avg_rating />
                    <span>{format!("{:.1}", product.avg_rating)}</span>
                    <span class="text-sm text-[color:var(--color-text-muted)]">
                        {product.total_reviews.separate_with_commas()}
                        " reviews"
                    </span>
                    <SentimentBadge sentiment=product.sentiment />
                </div>
                {product
                    .description
                    .clone()
                    .map(|description| {
                        view! { <p class="text-sm leading-relaxed max-w-2xl">{description}</p> }
                    })}
                <SentimentBars sentiment=product.sentiment />
            </div>
        </div>
    }
}

#[component]
fn SentimentBars(sentiment: Sentiment) -> impl IntoView {
    let rows = [
        ("Positive", sentiment.positive, "bg-green-500"),
        ("Neutral", sentiment.neutral, "bg-yellow-500"),
        ("Negative", sentiment.negative, "bg-red-500"),
    ];
    view! {
        <div class="flex flex-col gap-1 w-full max-w-md mt-2">
            {rows
                .map(|(label, percent, color)| {
                    view! {
                        <div class="flex flex-row items-center gap-2 text-xs">
                            <span class="w-16">{label}</span>
                            <div class="flex-1 h-2 rounded-full bg-white/10 overflow-hidden">
                                <div
                                    class=format!("h-full rounded-full {color}")
                                    style=format!("width: {percent:.0}%")
                                ></div>
                            </div>
                            <span class="w-10 text-right">{format!("{percent:.0}%")}</span>
                        </div>
                    }
                })}
        </div>
    }
}
