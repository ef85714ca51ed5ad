use leptos::prelude::*;

#[component]
pub fn BoxSkeleton() -> impl IntoView {
    view! {
        <div class="w-full animate-pulse space-y-2">
            {(0..4)
                .map(|_| {
                    view! {
                        <div class="flex items-center gap-4 p-3 rounded-lg panel">
                            <div class="w-10 h-10 rounded-md bg-white/10"></div>
                            <div class="flex-1 space-y-2">
                                <div class="h-3 w-3/5 bg-white/10 rounded-md"></div>
                                <div class="h-3 w-2/5 bg-white/10 rounded-md"></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="sr-only">"Loading"</div>
        </div>
    }
    .into_any()
}
