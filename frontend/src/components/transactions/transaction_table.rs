use shared::{DisplayRow, SortColumn, TransactionType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<DisplayRow>,
    pub active_sort: Option<SortColumn>,
    pub loading: bool,
    pub on_sort: Callback<SortColumn>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            {if props.loading {
                html! { <div class="loading">{"Carregando transações..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    {for SortColumn::ALL.iter().map(|column| {
                                        let column = *column;
                                        let on_sort = props.on_sort.clone();
                                        let sort_class = if props.active_sort == Some(column) {
                                            "sort-toggle active"
                                        } else {
                                            "sort-toggle"
                                        };
                                        html! {
                                            <th>
                                                {column.label()}
                                                <button
                                                    class={sort_class}
                                                    onclick={Callback::from(move |_| on_sort.emit(column))}
                                                >
                                                    {"▾"}
                                                </button>
                                            </th>
                                        }
                                    })}
                                </tr>
                            </thead>
                            <tbody>
                                {for props.rows.iter().map(|row| {
                                    let value_class = match row.transaction_type {
                                        TransactionType::Income => "value income",
                                        TransactionType::Outcome => "value outcome",
                                    };

                                    html! {
                                        <tr key={row.id.clone()}>
                                            <td class="title">{&row.title}</td>
                                            <td class={value_class}>{&row.formatted_value}</td>
                                            <td class="category">{&row.category_title}</td>
                                            <td class="date">{&row.formatted_date}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
