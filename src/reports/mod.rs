//! Category summaries: aggregation, reporting windows and presentation

pub mod aggregate;
pub mod category_report;
pub mod presenter;
pub mod window;

pub use aggregate::{merge_summaries, summarize, Aggregator};
pub use category_report::CategoryReport;
pub use presenter::{
    percentage_of, present, sort_largest_first, PercentageRounding, PresentedSummary, Presenter,
    SelectionSink, SummaryList, SummaryOrder,
};
pub use window::{parse_entry_date, AggregationWindow};
