use std::rc::Rc;

use shared::{Category, Transaction, TransactionPayload};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_api;
use crate::services::download;
use crate::services::logging::Logger;

/// Page size used by the transactions view.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Raw form values for a create or update. The amount sign is normalized
/// here, at the write boundary, not in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

impl TransactionDraft {
    fn into_payload(self) -> TransactionPayload {
        TransactionPayload::from_form(self.description, self.amount, self.category)
    }
}

/// Local cache of the server's list, never the system of record.
///
/// Held behind a reducer so every mutation folds into the state current at
/// dispatch time. Memoized callbacks only capture the stable dispatcher; a
/// captured state handle would read the snapshot of the render it was
/// created in and wipe rows fetched since.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionsCache {
    pub transactions: Vec<Transaction>,
}

pub enum CacheAction {
    /// Wholesale replacement with a fetched page
    Replace(Vec<Transaction>),
    /// Confirmed create: append the server-returned record
    Append(Transaction),
    /// Confirmed update: swap the matching entry, drop on id miss
    ReplaceById(Transaction),
    /// Confirmed delete
    Remove(i64),
}

impl Reducible for TransactionsCache {
    type Action = CacheAction;

    fn reduce(self: Rc<Self>, action: CacheAction) -> Rc<Self> {
        let transactions = match action {
            CacheAction::Replace(page) => page,
            CacheAction::Append(created) => {
                let mut next = self.transactions.clone();
                next.push(created);
                next
            }
            CacheAction::ReplaceById(updated) => {
                let mut next = self.transactions.clone();
                replace_by_id(&mut next, updated);
                next
            }
            CacheAction::Remove(id) => without_id(&self.transactions, id),
        };
        Rc::new(Self { transactions })
    }
}

#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
}

#[derive(Clone, PartialEq)]
pub struct TransactionsActions {
    /// Fetch a page and replace the cache wholesale
    pub list: Callback<(u32, u32)>,
    pub create: Callback<TransactionDraft>,
    pub update: Callback<(i64, TransactionDraft)>,
    pub remove: Callback<i64>,
    pub download_report: Callback<()>,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: TransactionsActions,
}

/// Replace the cached entry with the same id. A record that matches
/// nothing locally is dropped: appending could resurrect rows a newer
/// list refresh legitimately removed.
fn replace_by_id(transactions: &mut Vec<Transaction>, replacement: Transaction) {
    if let Some(slot) = transactions.iter_mut().find(|t| t.id == replacement.id) {
        *slot = replacement;
    }
}

fn without_id(transactions: &[Transaction], id: i64) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.id != id)
        .cloned()
        .collect()
}

/// Transaction sync controller.
///
/// Each operation is all-or-nothing with respect to the local cache: a
/// rejected call is logged and the cache keeps its prior state. In-flight
/// operations check a liveness guard before touching state, so a view that
/// unmounts mid-fetch never writes into dead handles.
#[hook]
pub fn use_transactions() -> UseTransactionsResult {
    let api = use_api();
    let cache = use_reducer(TransactionsCache::default);
    let loading = use_state(|| true);

    let alive = use_mut_ref(|| true);
    use_effect_with((), {
        let alive = alive.clone();
        move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        }
    });

    let list = {
        let api = api.clone();
        let dispatcher = cache.dispatcher();
        let loading = loading.clone();
        let alive = alive.clone();

        use_callback((), move |(skip, limit): (u32, u32), _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();
            let alive = alive.clone();

            spawn_local(async move {
                loading.set(true);
                match api.list_transactions(skip, limit).await {
                    Ok(page) => {
                        if *alive.borrow() {
                            dispatcher.dispatch(CacheAction::Replace(page));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "transactions",
                            &format!("failed to fetch transactions: {}", e),
                        );
                    }
                }
                if *alive.borrow() {
                    loading.set(false);
                }
            });
        })
    };

    let create = {
        let api = api.clone();
        let dispatcher = cache.dispatcher();
        let alive = alive.clone();

        use_callback((), move |draft: TransactionDraft, _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let alive = alive.clone();
            let payload = draft.into_payload();

            spawn_local(async move {
                match api.create_transaction(&payload).await {
                    Ok(created) => {
                        if *alive.borrow() {
                            dispatcher.dispatch(CacheAction::Append(created));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "transactions",
                            &format!("failed to save transaction: {}", e),
                        );
                    }
                }
            });
        })
    };

    let update = {
        let api = api.clone();
        let dispatcher = cache.dispatcher();
        let alive = alive.clone();

        use_callback((), move |(id, draft): (i64, TransactionDraft), _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let alive = alive.clone();
            let payload = draft.into_payload();

            spawn_local(async move {
                match api.update_transaction(id, &payload).await {
                    Ok(updated) => {
                        if *alive.borrow() {
                            dispatcher.dispatch(CacheAction::ReplaceById(updated));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "transactions",
                            &format!("failed to update transaction {}: {}", id, e),
                        );
                    }
                }
            });
        })
    };

    let remove = {
        let api = api.clone();
        let dispatcher = cache.dispatcher();
        let alive = alive.clone();

        use_callback((), move |id: i64, _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let alive = alive.clone();

            spawn_local(async move {
                match api.delete_transaction(id).await {
                    // Only a confirmed delete touches the cache
                    Ok(()) => {
                        if *alive.borrow() {
                            dispatcher.dispatch(CacheAction::Remove(id));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "transactions",
                            &format!("failed to delete transaction {}: {}", id, e),
                        );
                    }
                }
            });
        })
    };

    let download_report = {
        let api = api.clone();

        use_callback((), move |_, _| {
            let api = api.clone();
            spawn_local(async move {
                match api.report().await {
                    Ok(bytes) => {
                        if let Err(e) = download::save_csv("transactions-report.csv", &bytes) {
                            Logger::error_with_component(
                                "transactions",
                                &format!("failed to save report: {}", e),
                            );
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "transactions",
                            &format!("report download failed: {}", e),
                        );
                    }
                }
            });
        })
    };

    let state = TransactionsState {
        transactions: cache.transactions.clone(),
        loading: *loading,
    };

    let actions = TransactionsActions {
        list,
        create,
        update,
        remove,
        download_report,
    };

    UseTransactionsResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, description: &str, amount: f64, category: Category) -> Transaction {
        Transaction {
            id,
            date: "2024-01-17".to_string(),
            description: description.to_string(),
            amount,
            category,
        }
    }

    fn reduce(cache: TransactionsCache, action: CacheAction) -> TransactionsCache {
        (*Rc::new(cache).reduce(action)).clone()
    }

    fn listed_page() -> TransactionsCache {
        reduce(
            TransactionsCache::default(),
            CacheAction::Replace(vec![
                tx(1, "Salary", 5000.0, Category::Income),
                tx(2, "Rent", -1500.0, Category::Expense),
                tx(3, "Utilities", -120.0, Category::Expense),
            ]),
        )
    }

    #[test]
    fn test_replace_by_id_swaps_matching_entry() {
        let mut cache = vec![
            tx(1, "Salary", 5000.0, Category::Income),
            tx(2, "Rent", -1500.0, Category::Expense),
        ];
        replace_by_id(&mut cache, tx(2, "Rent (updated)", -1600.0, Category::Expense));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache[1].description, "Rent (updated)");
        assert_eq!(cache[1].amount, -1600.0);
    }

    #[test]
    fn test_replace_by_id_drops_unknown_id() {
        let mut cache = vec![tx(1, "Salary", 5000.0, Category::Income)];
        replace_by_id(&mut cache, tx(9, "Phantom", -10.0, Category::Expense));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache[0].id, 1);
    }

    #[test]
    fn test_without_id_removes_only_the_match() {
        let cache = vec![
            tx(1, "Salary", 5000.0, Category::Income),
            tx(2, "Rent", -1500.0, Category::Expense),
        ];
        let next = without_id(&cache, 1);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 2);

        // An id the server rejected never reaches this point, so the
        // failed-delete case leaves the cache identical by construction
        let unchanged = without_id(&cache, 99);
        assert_eq!(unchanged, cache);
    }

    #[test]
    fn test_append_keeps_previously_listed_rows() {
        // Create after a populated list must grow the page, not restart it
        let cache = reduce(
            listed_page(),
            CacheAction::Append(tx(4, "Groceries", -200.0, Category::Expense)),
        );
        assert_eq!(cache.transactions.len(), 4);
        assert_eq!(cache.transactions[0].description, "Salary");
        assert_eq!(cache.transactions[3].description, "Groceries");
        assert_eq!(cache.transactions[3].amount, -200.0);
    }

    #[test]
    fn test_replace_by_id_action_edits_in_place() {
        let cache = reduce(
            listed_page(),
            CacheAction::ReplaceById(tx(2, "Rent (updated)", -1600.0, Category::Expense)),
        );
        assert_eq!(cache.transactions.len(), 3);
        assert_eq!(cache.transactions[1].amount, -1600.0);
        assert_eq!(cache.transactions[0].description, "Salary");
        assert_eq!(cache.transactions[2].description, "Utilities");
    }

    #[test]
    fn test_remove_action_drops_only_the_match() {
        let cache = reduce(listed_page(), CacheAction::Remove(2));
        assert_eq!(cache.transactions.len(), 2);
        assert!(cache.transactions.iter().all(|t| t.id != 2));
    }

    #[test]
    fn test_replace_action_swaps_the_page_wholesale() {
        let cache = reduce(
            listed_page(),
            CacheAction::Replace(vec![tx(7, "Refund", 35.0, Category::Income)]),
        );
        assert_eq!(cache.transactions.len(), 1);
        assert_eq!(cache.transactions[0].id, 7);
    }

    #[test]
    fn test_draft_normalizes_expense_amount() {
        let draft = TransactionDraft {
            description: "Groceries".to_string(),
            amount: 200.0,
            category: Category::Expense,
        };
        let payload = draft.into_payload();
        assert_eq!(payload.amount, -200.0);
        assert_eq!(payload.category, Category::Expense);
    }

    #[test]
    fn test_draft_normalizes_income_amount() {
        let draft = TransactionDraft {
            description: "Refund".to_string(),
            amount: -35.0,
            category: Category::Income,
        };
        assert_eq!(draft.into_payload().amount, 35.0);
    }
}
