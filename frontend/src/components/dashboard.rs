use yew::prelude::*;

use crate::components::balance_cards::BalanceCards;
use crate::components::transactions::TransactionTable;
use crate::hooks::use_ledger::{use_ledger, UseLedgerResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api_client: ApiClient,
}

/// The main page: balance cards over the sortable transaction table.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let UseLedgerResult { state, actions } = use_ledger(&props.api_client);

    html! {
        <div class="container">
            {if let Some(notice) = &state.notice {
                html! { <div class="notice">{notice}</div> }
            } else {
                html! {}
            }}
            <BalanceCards cards={state.cards.clone()} />
            <TransactionTable
                rows={state.rows.clone()}
                active_sort={state.active_sort}
                loading={state.loading}
                on_sort={actions.sort_by.clone()}
            />
        </div>
    }
}
