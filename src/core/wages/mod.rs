//! Yearly wage aggregation: N salary producers feed one reducer through a
//! shared queue.

pub mod aggregator;
pub mod partition;
pub mod producer;
pub mod reducer;
pub mod state;

pub use aggregator::{
    AggregationOptions, AggregationOutcome, YearlyWageAggregator, get_yearly_wages_of_all_employees,
};
pub use partition::partition;
pub use state::{PipelineState, YearlyBatch};

use std::collections::BTreeMap;

/// employee id → yearly wages.
pub type WageMap = BTreeMap<i64, i64>;
