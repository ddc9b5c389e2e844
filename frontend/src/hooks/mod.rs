pub mod use_exchange_rates;
pub mod use_session;
pub mod use_summary;
pub mod use_transactions;

pub use use_exchange_rates::use_exchange_rates;
pub use use_session::{use_api, use_session};
pub use use_summary::use_summary;
pub use use_transactions::{use_transactions, TransactionDraft, DEFAULT_PAGE_LIMIT};
