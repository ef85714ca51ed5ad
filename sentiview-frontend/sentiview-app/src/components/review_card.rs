use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;
use sentiview_api_types::Review;

use super::star_rating::StarRating;
use crate::text::format_date;

fn label_chip_class(label: &str) -> &'static str {
    match label {
        "positive" => "px-2 py-0.5 rounded-full text-xs border bg-green-500/10 border-green-500/20 text-green-400",
        "negative" => "px-2 py-0.5 rounded-full text-xs border bg-red-500/10 border-red-500/20 text-red-400",
        _ => "px-2 py-0.5 rounded-full text-xs border bg-yellow-500/10 border-yellow-500/20 text-yellow-400",
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="panel rounded-lg p-4 flex flex-col gap-2">
            <div class="flex flex-row items-center gap-2 flex-wrap">
                {review.rating.map(|rating| view! { <StarRating rating /> })}
                <span class="font-medium">{review.title.clone().unwrap_or_default()}</span>
                {review
                    .is_verified
                    .then(|| {
                        view! {
                            <span class="flex items-center gap-1 text-xs text-green-400">
                                <Icon icon=i::BsPatchCheck />
                                "Verified purchase"
                            </span>
                        }
                    })}
                {review
                    .sentiment
                    .label
                    .clone()
                    .map(|label| {
                        let chip = label_chip_class(&label);
                        view! { <span class=chip>{label}</span> }
                    })}
            </div>
            <div class="text-xs text-[color:var(--color-text-muted)]">
                {review.author.clone().unwrap_or_else(|| "Anonymous".to_string())}
                " · "
                {format_date(review.review_date)}
                {review
                    .source
                    .clone()
                    .map(|source| format!(" · via {source}"))}
            </div>
            {review
                .text
                .clone()
                .map(|text| view! { <p class="text-sm leading-relaxed">{text}</p> })}
            {(review.helpful_count > 0)
                .then(|| {
                    view! {
                        <div class="flex items-center gap-1 text-xs text-[color:var(--color-text-muted)]">
                            <Icon icon=i::BsHandThumbsUp />
                            {review.helpful_count}
                            " found this helpful"
                        </div>
                    }
                })}
        </div>
    }
}
