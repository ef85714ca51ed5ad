use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Sentiview" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center gap-6">
            <h1 class="text-5xl font-bold">"404"</h1>
            <p class="text-[color:var(--color-text-muted)]">
                "The page you are looking for doesn't exist."
            </p>
            <A href="/" attr:class="btn">
                "Back to search"
            </A>
        </div>
    }
}
