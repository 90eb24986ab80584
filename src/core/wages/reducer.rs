use super::WageMap;
use super::state::{PipelineState, YearlyBatch};
use crate::errors::AppResult;
use crate::models::salary::total_wages;
use tracing::{debug, error, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducerState {
    Waiting,
    Draining,
    Terminated,
}

/// Drain the queue into a wage map until every producer is done.
///
/// Each batch is one employee's full year, so its total overwrites any
/// previous value for that employee.
pub fn run(state: &PipelineState) -> WageMap {
    let mut wages = WageMap::new();
    let mut phase = ReducerState::Waiting;

    while phase != ReducerState::Terminated {
        trace!(?phase, "reducer waiting");
        let Some(batches) = state.wait_batches() else {
            phase = ReducerState::Terminated;
            continue;
        };

        phase = ReducerState::Draining;
        for batch in batches {
            match reduce_batch(batch) {
                Ok((employee_id, total)) => {
                    wages.insert(employee_id, total);
                    debug!(employee_id, total, "wage map updated");
                }
                Err(e) => {
                    error!(error = %e, "reducer failed");
                    state.abort(e);
                    return wages;
                }
            }
        }
        phase = ReducerState::Waiting;
    }

    debug!(employees = wages.len(), "reducer terminated");
    wages
}

/// Sum a batch; the batch and its snapshots are released on return.
fn reduce_batch(batch: YearlyBatch) -> AppResult<(i64, i64)> {
    let total = total_wages(&batch.salaries)?;
    Ok((batch.employee_id, total))
}
