use yew::prelude::*;

use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_link = |target: Page, label: &str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.page == target {
            "nav-link current"
        } else {
            "nav-link"
        };
        html! {
            <button class={class} onclick={Callback::from(move |_| on_navigate.emit(target))}>
                {label}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"finview"}</h1>
                <nav>
                    {nav_link(Page::Dashboard, "Listagem")}
                    {nav_link(Page::Import, "Importar")}
                </nav>
            </div>
        </header>
    }
}
