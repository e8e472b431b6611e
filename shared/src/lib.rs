use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod cache;
pub mod dashboard;
pub mod format;

pub use cache::{LedgerCache, MemoryCache, BALANCE_KEY, TRANSACTIONS_KEY};
pub use dashboard::{DashboardState, LoadPhase};

/// One ledger entry as delivered by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    /// Non-negative magnitude; the sign is conveyed by `transaction_type`.
    pub value: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: Category,
    /// When the transaction occurred, not when it was fetched.
    pub created_at: DateTime<Utc>,
}

/// Direction of a transaction, for sign and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// Aggregate totals computed by the remote service; never recomputed
/// client-side. The three fields arrive as one atomic snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

/// One atomic `{balance, transactions}` pair retrieved from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub balance: Balance,
    pub transactions: Vec<Transaction>,
}

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Value,
    Category,
    CreatedAt,
}

impl SortColumn {
    /// Columns in display order, for rendering the table header.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Title,
        SortColumn::Value,
        SortColumn::Category,
        SortColumn::CreatedAt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Title => "Título",
            SortColumn::Value => "Preço",
            SortColumn::Category => "Categoria",
            SortColumn::CreatedAt => "Data",
        }
    }
}

/// Display-ready projection of a transaction for the table.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: String,
    pub title: String,
    pub formatted_value: String,
    pub transaction_type: TransactionType,
    pub category_title: String,
    pub formatted_date: String,
}

/// Formatted strings for the three balance cards.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceDisplay {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_wire_format() {
        let json = r#"{
            "id": "a3c9d1f0-5b2e-4f7a-9c8d-1e2f3a4b5c6d",
            "title": "Salário",
            "value": 3000.0,
            "type": "income",
            "category": { "title": "Renda" },
            "created_at": "2024-04-02T12:30:00.000Z"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.title, "Salário");
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.category.title, "Renda");
        assert_eq!(transaction.value, 3000.0);

        // The enum must round-trip through the lowercase wire name.
        let encoded = serde_json::to_string(&transaction).unwrap();
        assert!(encoded.contains(r#""type":"income""#));
        let decoded: Transaction = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, transaction);
    }

    #[test]
    fn test_snapshot_wire_format() {
        let json = r#"{
            "balance": { "income": "100.00", "outcome": "40.00", "total": "60.00" },
            "transactions": []
        }"#;

        let snapshot: LedgerSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.balance.total, "60.00");
        assert!(snapshot.transactions.is_empty());
    }

    #[test]
    fn test_sort_column_labels() {
        let labels: Vec<&str> = SortColumn::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Título", "Preço", "Categoria", "Data"]);
    }
}
