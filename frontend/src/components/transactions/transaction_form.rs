use shared::{Category, Transaction};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::TransactionDraft;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    /// Existing record to pre-fill when editing, `None` for a new entry
    pub editing: Option<Transaction>,
    pub on_submit: Callback<TransactionDraft>,
    pub on_cancel: Callback<()>,
}

/// Modal create/edit form. Amounts are entered unsigned; the category
/// select decides the stored sign downstream.
#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let description = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|t| t.description.clone())
            .unwrap_or_default()
    });
    let amount = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|t| format!("{:.2}", t.amount.abs()))
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|t| t.category)
            .unwrap_or(Category::Expense)
    });

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let chosen = match select.value().as_str() {
                "income" => Category::Income,
                _ => Category::Expense,
            };
            category.set(chosen);
        })
    };

    let on_submit = {
        let description = description.clone();
        let amount = amount.clone();
        let category = category.clone();
        let emit_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            emit_submit.emit(TransactionDraft {
                description: (*description).clone(),
                amount: amount.parse::<f64>().unwrap_or(0.0),
                category: *category,
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let title = if props.editing.is_some() {
        "Edit Transaction"
    } else {
        "Add Transaction"
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h3 class="modal-title">{ title }</h3>
                <form class="transaction-form" onsubmit={on_submit}>
                    <label class="form-field">
                        <span class="form-label">{"Description"}</span>
                        <input
                            type="text"
                            class="form-input"
                            required=true
                            value={(*description).clone()}
                            oninput={on_description_input}
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-label">{"Amount"}</span>
                        <input
                            type="number"
                            class="form-input"
                            step="0.01"
                            min="0"
                            required=true
                            value={(*amount).clone()}
                            oninput={on_amount_input}
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-label">{"Category"}</span>
                        <select class="form-input" onchange={on_category_change}>
                            <option value="expense" selected={*category == Category::Expense}>
                                {"Expense"}
                            </option>
                            <option value="income" selected={*category == Category::Income}>
                                {"Income"}
                            </option>
                        </select>
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="modal-cancel" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="modal-save">
                            { if props.editing.is_some() { "Save changes" } else { "Add" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
