use shared::{Category, Transaction};
use yew::prelude::*;

use crate::services::format;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub on_edit: Callback<Transaction>,
    pub on_delete: Callback<i64>,
}

/// Tabular transaction list. Amounts are shown unsigned with a category
/// class carrying the color; the sign already lives in the stored value.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    if props.loading {
        return html! {
            <div class="table-placeholder">{"Loading transactions..."}</div>
        };
    }

    if props.transactions.is_empty() {
        return html! {
            <div class="table-placeholder">{"No transactions yet."}</div>
        };
    }

    let rows: Html = props
        .transactions
        .iter()
        .map(|transaction| {
            let amount_class = match transaction.category {
                Category::Income => "amount amount-income",
                Category::Expense => "amount amount-expense",
            };
            let amount_prefix = match transaction.category {
                Category::Income => "+",
                Category::Expense => "-",
            };

            let on_edit = {
                let on_edit = props.on_edit.clone();
                let transaction = transaction.clone();
                Callback::from(move |_: MouseEvent| on_edit.emit(transaction.clone()))
            };
            let on_delete = {
                let on_delete = props.on_delete.clone();
                let id = transaction.id;
                Callback::from(move |_: MouseEvent| on_delete.emit(id))
            };

            html! {
                <tr key={transaction.id.to_string()}>
                    <td class="cell-date">{ format::display_date(&transaction.date) }</td>
                    <td class="cell-description">{ transaction.description.clone() }</td>
                    <td class="cell-category">{ transaction.category.label() }</td>
                    <td class={amount_class}>
                        { format!("{}{}", amount_prefix, format::currency_abs(transaction.amount)) }
                    </td>
                    <td class="cell-actions">
                        <button type="button" class="row-action" onclick={on_edit}>
                            {"Edit"}
                        </button>
                        <button type="button" class="row-action row-action-danger" onclick={on_delete}>
                            {"Delete"}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect();

    html! {
        <table class="transaction-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Description"}</th>
                    <th>{"Category"}</th>
                    <th>{"Amount"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { rows }
            </tbody>
        </table>
    }
}
