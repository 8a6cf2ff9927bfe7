use contracts::domain::a001_contribuinte::aggregate::ContribuinteRecord;
use leptos::prelude::*;

use crate::domain::a001_contribuinte::api::ContribuinteQuery;
use crate::shared::api_error::ApiError;
use crate::shared::date_utils::format_date;

pub const NOT_FOUND_MESSAGE: &str = "Contribuinte not found";
pub const GENERIC_ERROR_MESSAGE: &str = "Error fetching data";

/// Active filter of the record browser. At most one can be set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    NoFilter,
    ByDate(String),
    ByTaxId(String),
    ByClient(String),
}

impl FilterState {
    pub fn date(&self) -> &str {
        match self {
            FilterState::ByDate(v) => v,
            _ => "",
        }
    }

    pub fn tax_id(&self) -> &str {
        match self {
            FilterState::ByTaxId(v) => v,
            _ => "",
        }
    }

    pub fn client(&self) -> &str {
        match self {
            FilterState::ByClient(v) => v,
            _ => "",
        }
    }

    /// Remote query this filter maps to
    pub fn query(&self) -> Option<ContribuinteQuery> {
        match self {
            FilterState::NoFilter => None,
            FilterState::ByDate(v) => Some(ContribuinteQuery::ByDate(v.clone())),
            FilterState::ByTaxId(v) => Some(ContribuinteQuery::ByTaxId(v.clone())),
            FilterState::ByClient(v) => Some(ContribuinteQuery::ByClient(v.clone())),
        }
    }

    /// Text used after "for" in the results line
    pub fn label(&self) -> Option<String> {
        match self {
            FilterState::NoFilter => None,
            FilterState::ByDate(v) => Some(format_date(v)),
            FilterState::ByTaxId(v) => Some(format!("CPF/CNPJ {}", v)),
            FilterState::ByClient(v) => Some(format!("client \"{}\"", v)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseError {
    /// Tax-id lookup answered 404
    NotFound,
    Failed(String),
}

impl BrowseError {
    pub fn message(&self) -> String {
        match self {
            BrowseError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            BrowseError::Failed(msg) => msg.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ContribuinteRecord>),
    Error(BrowseError),
}

/// A query the page must issue, tagged with the generation it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    pub query: ContribuinteQuery,
}

/// Filter-state coordinator of the record browser.
///
/// Setters never perform I/O: they return the [`QueryTicket`] to run, and the
/// caller hands the outcome back to [`ContribuinteListState::resolve`].
/// Only the outcome of the most recently issued ticket is applied.
#[derive(Clone, Debug, Default)]
pub struct ContribuinteListState {
    filter: FilterState,
    view: ViewState,
    latest_seq: u64,
}

impl ContribuinteListState {
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_date_filter(&mut self, value: &str) -> Option<QueryTicket> {
        self.apply(value, FilterState::ByDate)
    }

    pub fn set_tax_id_filter(&mut self, value: &str) -> Option<QueryTicket> {
        self.apply(value, FilterState::ByTaxId)
    }

    pub fn set_client_filter(&mut self, value: &str) -> Option<QueryTicket> {
        self.apply(value, FilterState::ByClient)
    }

    fn apply(&mut self, value: &str, make: fn(String) -> FilterState) -> Option<QueryTicket> {
        // Bumped even for empty values so a late reply cannot repopulate a
        // cleared result set.
        self.latest_seq += 1;

        let value = value.trim();
        if value.is_empty() {
            self.filter = FilterState::NoFilter;
            self.view = ViewState::Idle;
            return None;
        }

        self.filter = make(value.to_string());
        self.view = ViewState::Loading;
        self.filter.query().map(|query| QueryTicket {
            seq: self.latest_seq,
            query,
        })
    }

    /// Apply the outcome of ticket `seq`. Returns `false` if it was stale.
    pub fn resolve(
        &mut self,
        seq: u64,
        outcome: Result<Vec<ContribuinteRecord>, ApiError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.view = match outcome {
            Ok(records) => ViewState::Loaded(records),
            Err(ApiError::NotFound { .. }) if matches!(self.filter, FilterState::ByTaxId(_)) => {
                ViewState::Error(BrowseError::NotFound)
            }
            Err(e) => ViewState::Error(BrowseError::Failed(e.user_message(GENERIC_ERROR_MESSAGE))),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn records(&self) -> &[ContribuinteRecord] {
        match &self.view {
            ViewState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.view {
            ViewState::Error(e) => Some(e.message()),
            _ => None,
        }
    }

    /// "Found N record(s) for ..." / "No records found for ...", only once
    /// the current filter's reply has landed.
    pub fn summary(&self) -> Option<String> {
        let label = self.filter.label()?;
        match &self.view {
            ViewState::Loaded(records) if records.is_empty() => {
                Some(format!("No records found for {}", label))
            }
            ViewState::Loaded(records) => {
                Some(format!("Found {} record(s) for {}", records.len(), label))
            }
            _ => None,
        }
    }
}

pub fn create_state() -> RwSignal<ContribuinteListState> {
    RwSignal::new(ContribuinteListState::default())
}
