use shared::Transaction;
use yew::prelude::*;

use crate::components::transactions::exchange_rate_panel::ExchangeRatePanel;
use crate::components::transactions::transaction_form::TransactionForm;
use crate::components::transactions::transaction_table::TransactionTable;
use crate::hooks::{use_exchange_rates, use_transactions, TransactionDraft, DEFAULT_PAGE_LIMIT};

/// Transactions view: paged table, create/edit modal, CSV export, and the
/// exchange-rate side panel.
#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let transactions = use_transactions();
    let rates = use_exchange_rates();

    let show_form = use_state(|| false);
    let editing = use_state(|| Option::<Transaction>::None);

    // First page on mount; mutations keep the cache in sync after that
    use_effect_with((), {
        let list = transactions.actions.list.clone();
        move |_| {
            list.emit((0, DEFAULT_PAGE_LIMIT));
            || ()
        }
    });

    let open_create = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            show_form.set(true);
        })
    };

    let open_edit = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        Callback::from(move |transaction: Transaction| {
            editing.set(Some(transaction));
            show_form.set(true);
        })
    };

    let close_form = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            show_form.set(false);
            editing.set(None);
        })
    };

    let on_submit = {
        let show_form = show_form.clone();
        let editing = editing.clone();
        let create = transactions.actions.create.clone();
        let update = transactions.actions.update.clone();
        Callback::from(move |draft: TransactionDraft| {
            match &*editing {
                Some(existing) => update.emit((existing.id, draft)),
                None => create.emit(draft),
            }
            show_form.set(false);
            editing.set(None);
        })
    };

    let on_delete = transactions.actions.remove.clone();

    let on_download = {
        let download = transactions.actions.download_report.clone();
        Callback::from(move |_: MouseEvent| download.emit(()))
    };

    html! {
        <div class="transactions-view">
            <div class="transactions-toolbar">
                <h2 class="view-title">{"Transactions"}</h2>
                <div class="toolbar-actions">
                    <button type="button" class="toolbar-button" onclick={on_download}>
                        {"Download CSV"}
                    </button>
                    <button type="button" class="toolbar-button toolbar-button-primary" onclick={open_create}>
                        {"Add Transaction"}
                    </button>
                </div>
            </div>

            <div class="transactions-layout">
                <section class="panel transactions-panel">
                    <TransactionTable
                        transactions={transactions.state.transactions.clone()}
                        loading={transactions.state.loading}
                        on_edit={open_edit}
                        on_delete={on_delete}
                    />
                </section>
                <ExchangeRatePanel
                    snapshot={rates.state.snapshot.clone()}
                    refreshing={rates.state.refreshing}
                    on_refresh={rates.refresh.clone()}
                />
            </div>

            { if *show_form {
                html! {
                    <TransactionForm
                        editing={(*editing).clone()}
                        on_submit={on_submit}
                        on_cancel={close_form}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
