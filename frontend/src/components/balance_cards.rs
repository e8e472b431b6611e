use shared::BalanceDisplay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalanceCardsProps {
    pub cards: BalanceDisplay,
}

/// The three summary cards: inflow, outflow and net total.
#[function_component(BalanceCards)]
pub fn balance_cards(props: &BalanceCardsProps) -> Html {
    html! {
        <div class="card-container">
            <div class="card">
                <header>
                    <p>{"Entradas"}</p>
                    <span class="card-icon income" />
                </header>
                <h1>{&props.cards.income}</h1>
            </div>
            <div class="card">
                <header>
                    <p>{"Saídas"}</p>
                    <span class="card-icon outcome" />
                </header>
                <h1>{&props.cards.outcome}</h1>
            </div>
            <div class="card total">
                <header>
                    <p>{"Total"}</p>
                    <span class="card-icon total" />
                </header>
                <h1>{&props.cards.total}</h1>
            </div>
        </div>
    }
}
