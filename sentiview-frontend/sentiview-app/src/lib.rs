pub(crate) mod api;
pub(crate) mod components;
pub(crate) mod error;
pub(crate) mod main_nav;
pub mod routes;
pub(crate) mod text;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::main_nav::MainNav;
use crate::routes::{home_page::HomePage, not_found::NotFound, product_view::ProductView};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/sentiview.css" />
        <Title text="Sentiview" />
        <Router>
            <MainNav />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/product/:id") view=ProductView />
                </Routes>
            </main>
        </Router>
    }
}
