use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_router::components::A;
use sentiview_api_types::Product;
use thousands::Separable;

use super::sentiment_badge::SentimentBadge;
use super::star_rating::StarRating;
use crate::text::truncate;

const NAME_CHARS: usize = 60;
const DESCRIPTION_CHARS: usize = 100;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let name = truncate(Some(&product.name), NAME_CHARS);
    let description = truncate(product.description.as_deref(), DESCRIPTION_CHARS);
    let image = match product.image_url.clone() {
        Some(url) => view! {
            <img
                src=url
                alt=product.name.clone()
                class="w-full h-40 object-contain bg-white/5"
                loading="lazy"
            />
        }
        .into_any(),
        None => view! {
            <div class="w-full h-40 flex items-center justify-center bg-white/5 text-[color:var(--color-text-muted)]">
                <Icon icon=i::BsImage width="2em" height="2em" />
            </div>
        }
        .into_any(),
    };
    view! {
        <A
            href=format!("/product/{}", product.id)
            attr:class="panel flex flex-col rounded-lg overflow-hidden hover:bg-[color:var(--color-background-elevated)] transition-colors"
        >
            {image}
            <div class="flex flex-col gap-2 p-3">
                <span class="font-medium">{name}</span>
                <span class="text-sm text-[color:var(--color-text-muted)]">{description}</span>
                <div class="flex flex-row items-center gap-2">
                    <StarRating rating=product.avg_rating />
                    <span class="text-sm">{format!("{:.1}", product.avg_rating)}</span>
                    <span class="text-xs text-[color:var(--color-text-muted)]">
                        {product.total_reviews.separate_with_commas()}
                        " reviews"
                    </span>
                </div>
                <SentimentBadge sentiment=product.sentiment />
            </div>
        </A>
    }
}
