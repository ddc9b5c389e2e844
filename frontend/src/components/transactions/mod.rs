pub mod exchange_rate_panel;
pub mod transaction_form;
pub mod transaction_table;
pub mod transactions_page;

pub use transactions_page::TransactionsPage;
