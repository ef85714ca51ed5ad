use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MainNav() -> impl IntoView {
    view! {
        <nav class="header flex flex-row items-baseline gap-3 px-4 py-3">
            <A href="/" attr:class="text-xl font-bold tracking-tight">
                "Sentiview"
            </A>
            <span class="text-xs text-[color:var(--color-text-muted)]">
                "reviews, aggregated"
            </span>
        </nav>
    }
}
