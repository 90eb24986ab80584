use rwagelog::core::wages::partition::{default_workers, partition};
use rwagelog::core::wages::{PipelineState, YearlyBatch};
use rwagelog::errors::AppError;

fn batch(employee_id: i64) -> YearlyBatch {
    YearlyBatch {
        employee_id,
        salaries: Vec::new(),
    }
}

#[test]
fn test_partition_covers_every_index_once() {
    for len in 0..40 {
        for workers in 1..12 {
            let chunks = partition(len, workers);
            assert_eq!(chunks.len(), workers, "len={len} workers={workers}");

            let mut next = 0;
            for c in &chunks {
                assert_eq!(c.start, next, "len={len} workers={workers}");
                assert!(c.end >= c.start);
                next = c.end;
            }
            assert_eq!(next, len, "len={len} workers={workers}");
        }
    }
}

#[test]
fn test_partition_last_chunk_takes_the_remainder() {
    assert_eq!(partition(10, 3), vec![0..3, 3..6, 6..10]);
    assert_eq!(partition(2, 4), vec![0..0, 0..0, 0..0, 0..2]);
}

#[test]
fn test_partition_zero_workers_means_one() {
    assert_eq!(partition(5, 0), vec![0..5]);
    assert!(default_workers() >= 1);
}

#[test]
fn test_state_without_workers_is_done() {
    let state = PipelineState::new(0, false);
    assert!(state.is_done());
    assert!(state.wait_batches().is_none());
}

#[test]
fn test_state_drains_before_terminating() {
    let state = PipelineState::new(2, false);
    state.push(batch(2));
    state.push(batch(3));
    state.worker_finished();
    assert!(!state.is_done());
    state.worker_finished();
    assert!(state.is_done());

    let drained: Vec<i64> = state
        .wait_batches()
        .unwrap()
        .into_iter()
        .map(|b| b.employee_id)
        .collect();
    assert_eq!(drained, vec![2, 3]);
    assert!(state.wait_batches().is_none());
}

#[test]
fn test_state_keeps_the_first_error() {
    let state = PipelineState::new(1, false);
    state.record_error(AppError::Storage("first".into()));
    state.record_error(AppError::Storage("second".into()));

    assert!(!state.is_cancelled());
    match state.take_error() {
        Some(AppError::Storage(msg)) => assert_eq!(msg, "first"),
        other => panic!("unexpected error slot: {other:?}"),
    }
    assert!(state.take_error().is_none());
}

#[test]
fn test_state_fail_fast_cancels_producers() {
    let state = PipelineState::new(3, true);
    assert!(!state.is_cancelled());
    state.record_error(AppError::EmployeeNotFound(4));
    assert!(state.is_cancelled());
}

#[test]
fn test_state_abort_marks_done() {
    let state = PipelineState::new(2, false);
    state.abort(AppError::WageOverflow(5));

    assert!(state.is_done());
    assert!(state.is_cancelled());
    assert!(matches!(state.take_error(), Some(AppError::WageOverflow(5))));
}

#[test]
fn test_state_wakes_a_waiting_reducer() {
    let state = PipelineState::new(1, false);

    let received = std::thread::scope(|s| {
        let reducer = s.spawn(|| {
            let mut ids = Vec::new();
            while let Some(batches) = state.wait_batches() {
                ids.extend(batches.into_iter().map(|b| b.employee_id));
            }
            ids
        });

        state.push(batch(7));
        state.push(batch(8));
        state.worker_finished();

        reducer.join().unwrap()
    });

    assert_eq!(received, vec![7, 8]);
}
