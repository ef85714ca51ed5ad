use icondata as i;
use leptos::{html::Div, prelude::*, task::spawn_local};
use leptos_icons::*;
use leptos_use::{on_click_outside, signal_debounced};

use crate::api::autocomplete;

/// Input has to be at least this long, after trimming, before suggestions
/// are fetched.
const MIN_QUERY_CHARS: usize = 2;
/// Quiet period between the last keystroke and the suggestions request.
const DEBOUNCE_MS: f64 = 300.0;

#[component]
pub fn SearchBox(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let (query, set_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (open, set_open) = signal(false);
    // A query that was just submitted must not pop its own suggestion list
    // back open once the debounce window elapses.
    let submitted = StoredValue::new(None::<String>);

    let debounced: Signal<String> = signal_debounced(query, DEBOUNCE_MS);

    // Anything under the minimum length dismisses the list right away,
    // before the quiet period even starts.
    Effect::new(move |_| {
        if query.with(|q| q.trim().chars().count()) < MIN_QUERY_CHARS {
            set_suggestions(Vec::new());
            set_open(false);
        }
    });

    Effect::new(move |_| {
        let trimmed = debounced.with(|q| q.trim().to_string());
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return;
        }
        if submitted.with_value(|s| s.as_deref() == Some(trimmed.as_str())) {
            return;
        }
        spawn_local(async move {
            match autocomplete(&trimmed).await {
                Ok(items) if !items.is_empty() => {
                    set_suggestions(items);
                    set_open(true);
                }
                Ok(_) => {
                    set_suggestions(Vec::new());
                    set_open(false);
                }
                Err(e) => {
                    // suggestions are a convenience; failures stay quiet
                    log::debug!("autocomplete for '{trimmed}' failed: {e}");
                    set_suggestions(Vec::new());
                    set_open(false);
                }
            }
        });
    });

    let submit_query = move |value: String| {
        submitted.set_value(Some(value.clone()));
        set_suggestions(Vec::new());
        set_open(false);
        on_search.run(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let trimmed = query.with(|q| q.trim().to_string());
        if trimmed.is_empty() {
            return;
        }
        submit_query(trimmed);
    };

    let _ = on_click_outside(container, move |_| set_open(false));

    view! {
        <div class="relative w-full max-w-xl" node_ref=container>
            <form on:submit=on_submit>
                <div class="relative">
                    <input
                        type="search"
                        placeholder="Search products..."
                        class="input w-full pl-10"
                        prop:value=query
                        on:input=move |ev| set_query(event_target_value(&ev))
                    />
                    <div class="absolute left-3 top-1/2 -translate-y-1/2 text-[color:var(--color-text-muted)]">
                        <Icon icon=i::AiSearchOutlined />
                    </div>
                </div>
            </form>
            <div
                class="absolute w-full mt-2 z-50 panel rounded-lg overflow-hidden"
                class:hidden=move || !open()
            >
                {move || {
                    suggestions()
                        .into_iter()
                        .map(|suggestion| {
                            let fill = suggestion.clone();
                            view! {
                                <button
                                    type="button"
                                    class="w-full text-left p-2 hover:bg-[color:var(--color-background-elevated)] cursor-pointer"
                                    on:click=move |_| {
                                        set_query(fill.clone());
                                        submit_query(fill.clone());
                                    }
                                >
                                    {suggestion}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
