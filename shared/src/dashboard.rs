//! Dashboard controller: owns the transaction list, balance snapshot and
//! sort indicator, and keeps them in step with the persistent cache.
//!
//! Activation follows cache-then-network: state is seeded synchronously
//! from the cache so the first render can show last-known data, then a
//! single fetch replaces everything wholesale on success. A failed fetch
//! keeps whatever was already on screen.

use std::cmp::Ordering;

use crate::cache::{self, LedgerCache, BALANCE_KEY, TRANSACTIONS_KEY};
use crate::format::{format_brl, format_brl_str, format_date};
use crate::{
    Balance, BalanceDisplay, DisplayRow, LedgerSnapshot, SortColumn, Transaction,
    TransactionType,
};

/// Where the controller stands in its activation lifecycle.
///
/// `Loaded` and `Failed` are terminal for a given activation; there is no
/// retry or polling. Sorting is orthogonal and legal in every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// In-memory state behind the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    balance: Option<Balance>,
    active_sort: Option<SortColumn>,
    phase: LoadPhase,
    notice: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            balance: None,
            active_sort: None,
            phase: LoadPhase::Idle,
            notice: None,
        }
    }
}

impl DashboardState {
    /// Seeds state from whatever the cache holds.
    ///
    /// A missing entry starts the dashboard empty; an entry that fails to
    /// parse is discarded and treated the same way. Neither is fatal.
    pub fn seed_from_cache(cache: &impl LedgerCache) -> Self {
        let transactions = cache::read_json(cache, TRANSACTIONS_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        let balance = cache::read_json(cache, BALANCE_KEY).ok().flatten();

        Self {
            transactions,
            balance,
            ..Self::default()
        }
    }

    /// Marks the remote fetch as in flight.
    pub fn begin_fetch(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Replaces in-memory state wholesale with a fresh snapshot and
    /// overwrites the cache.
    ///
    /// The two cache writes are independent, not transactional. The sort
    /// indicator is left as-is; rows arrive in server order until the user
    /// sorts again.
    pub fn apply_snapshot(&mut self, snapshot: LedgerSnapshot, cache: &impl LedgerCache) {
        cache::write_json(cache, TRANSACTIONS_KEY, &snapshot.transactions);
        self.transactions = snapshot.transactions;

        cache::write_json(cache, BALANCE_KEY, &snapshot.balance);
        self.balance = Some(snapshot.balance);

        self.phase = LoadPhase::Loaded;
        self.notice = None;
    }

    /// Records a failed fetch, keeping the cached (possibly empty) data
    /// and a notice the view can surface to the user.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed;
        self.notice = Some(message.into());
    }

    /// Stable ascending sort of the full list by `column`, which becomes
    /// the active sort indicator.
    ///
    /// Sorting is a pure reordering: it never changes the set of
    /// transactions or any field value.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.transactions.sort_by(comparator(column));
        self.active_sort = Some(column);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> Option<&Balance> {
        self.balance.as_ref()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn active_sort(&self) -> Option<SortColumn> {
        self.active_sort
    }

    /// Whether `column` is the one currently determining display order.
    pub fn is_sorted_by(&self, column: SortColumn) -> bool {
        self.active_sort == Some(column)
    }

    /// Category of the first displayed row, if any row exists yet.
    pub fn first_category_title(&self) -> Option<&str> {
        self.transactions.first().map(|tx| tx.category.title.as_str())
    }

    /// Display-ready projection of the current rows. Pure and idempotent.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.transactions.iter().map(display_row).collect()
    }

    /// Formatted strings for the three balance cards. An absent balance
    /// formats as zero.
    pub fn balance_display(&self) -> BalanceDisplay {
        match &self.balance {
            Some(balance) => BalanceDisplay {
                income: format_brl_str(&balance.income),
                outcome: format_brl_str(&balance.outcome),
                total: format_brl_str(&balance.total),
            },
            None => BalanceDisplay {
                income: format_brl(0.0),
                outcome: format_brl(0.0),
                total: format_brl(0.0),
            },
        }
    }
}

fn comparator(column: SortColumn) -> impl FnMut(&Transaction, &Transaction) -> Ordering {
    move |a, b| match column {
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Value => a.value.total_cmp(&b.value),
        SortColumn::Category => a.category.title.cmp(&b.category.title),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

fn display_row(tx: &Transaction) -> DisplayRow {
    let formatted_value = match tx.transaction_type {
        TransactionType::Income => format_brl(tx.value),
        TransactionType::Outcome => format!("- {}", format_brl(tx.value)),
    };

    DisplayRow {
        id: tx.id.clone(),
        title: tx.title.clone(),
        formatted_value,
        transaction_type: tx.transaction_type,
        category_title: tx.category.title.clone(),
        formatted_date: format_date(&tx.created_at),
    }
}
