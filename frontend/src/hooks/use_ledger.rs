use std::cell::Cell;
use std::rc::Rc;

use shared::{BalanceDisplay, DashboardState, DisplayRow, LedgerSnapshot, LoadPhase, SortColumn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::storage::BrowserCache;

/// Observable surface the dashboard view renders from.
#[derive(Clone, PartialEq)]
pub struct LedgerState {
    pub rows: Vec<DisplayRow>,
    pub cards: BalanceDisplay,
    pub active_sort: Option<SortColumn>,
    pub loading: bool,
    pub notice: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct LedgerActions {
    pub sort_by: Callback<SortColumn>,
}

pub struct UseLedgerResult {
    pub state: LedgerState,
    pub actions: LedgerActions,
}

enum LedgerAction {
    FetchStarted,
    SnapshotArrived(LedgerSnapshot),
    FetchFailed(String),
    SortBy(SortColumn),
}

#[derive(Clone, PartialEq)]
struct Ledger(DashboardState);

impl Reducible for Ledger {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: LedgerAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            LedgerAction::FetchStarted => next.begin_fetch(),
            LedgerAction::SnapshotArrived(snapshot) => {
                next.apply_snapshot(snapshot, &BrowserCache::new())
            }
            LedgerAction::FetchFailed(message) => next.fetch_failed(message),
            LedgerAction::SortBy(column) => next.sort_by(column),
        }
        Rc::new(Ledger(next))
    }
}

/// Drives the dashboard controller for one view mount.
///
/// State is seeded synchronously from the browser cache, so the first
/// render already shows last-known data; a single fetch then replaces it.
#[hook]
pub fn use_ledger(api_client: &ApiClient) -> UseLedgerResult {
    let ledger = use_reducer(|| Ledger(DashboardState::seed_from_cache(&BrowserCache::new())));

    // One fetch per mount, with a teardown guard so a resumption after the
    // view is gone becomes a no-op.
    {
        let ledger = ledger.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            let guard = mounted.clone();

            ledger.dispatch(LedgerAction::FetchStarted);
            spawn_local(async move {
                let outcome = api_client.fetch_ledger().await;
                if !mounted.get() {
                    return;
                }

                match outcome {
                    Ok(snapshot) => ledger.dispatch(LedgerAction::SnapshotArrived(snapshot)),
                    Err(e) => {
                        gloo::console::error!("failed to fetch the ledger:", e);
                        ledger.dispatch(LedgerAction::FetchFailed(
                            "Não foi possível atualizar as transações".to_string(),
                        ));
                    }
                }
            });

            move || guard.set(false)
        });
    }

    let sort_by = {
        let ledger = ledger.clone();
        use_callback((), move |column: SortColumn, _| {
            ledger.dispatch(LedgerAction::SortBy(column));
        })
    };

    let state = LedgerState {
        rows: ledger.0.display_rows(),
        cards: ledger.0.balance_display(),
        active_sort: ledger.0.active_sort(),
        loading: ledger.0.phase() == LoadPhase::Loading,
        notice: ledger.0.notice().map(str::to_string),
    };

    UseLedgerResult {
        state,
        actions: LedgerActions { sort_by },
    }
}
