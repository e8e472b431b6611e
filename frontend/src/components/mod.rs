pub mod balance_cards;
pub mod dashboard;
pub mod header;
pub mod import;
pub mod transactions;

pub use dashboard::Dashboard;
pub use header::Header;
pub use import::ImportPage;
