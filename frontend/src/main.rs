use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{Dashboard, Header, ImportPage};
use services::api::ApiClient;

/// Top-level pages reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Import,
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Dashboard);
    let api_client = ApiClient::new();

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    // Returning from a finished import lands back on the dashboard, which
    // remounts it and refetches the ledger.
    let on_import_done = {
        let page = page.clone();
        Callback::from(move |_| page.set(Page::Dashboard))
    };

    html! {
        <>
            <Header page={*page} on_navigate={on_navigate} />
            {match *page {
                Page::Dashboard => html! { <Dashboard api_client={api_client.clone()} /> },
                Page::Import => html! {
                    <ImportPage api_client={api_client.clone()} on_done={on_import_done} />
                },
            }}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
