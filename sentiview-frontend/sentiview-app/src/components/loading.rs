use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 p-8">
            <div class="spinner"><div></div><div></div><div></div><div></div></div>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}
