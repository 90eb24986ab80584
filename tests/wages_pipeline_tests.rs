use chrono::{Datelike, NaiveDate};
use rwagelog::core::payroll::PayrollSource;
use rwagelog::core::wages::producer::yearly_batch;
use rwagelog::core::wages::{
    AggregationOptions, WageMap, YearlyWageAggregator, get_yearly_wages_of_all_employees,
};
use rwagelog::errors::AppError;
use rwagelog::models::employee::Employee;
use rwagelog::models::period::Period;
use rwagelog::models::salary::total_wages;

mod common;
use common::{MemorySource, roster};

fn options(workers: usize) -> AggregationOptions {
    AggregationOptions {
        workers,
        ..AggregationOptions::default()
    }
}

/// Sum the twelve monthly batches of one employee the slow way
fn manual_total(source: &MemorySource, employee_id: i64, year: i32, rate: i64) -> i64 {
    (1..=12)
        .map(|month| {
            let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let salaries = source
                .salaries_of_employee(employee_id, start, Period::Monthly, rate)
                .unwrap();
            total_wages(&salaries).unwrap()
        })
        .sum()
}

#[test]
fn test_scenario_8_hours_per_day_2024() {
    let source = MemorySource::new(roster(3), 8);

    let wages = get_yearly_wages_of_all_employees(&source, "2024", options(2)).unwrap();

    assert_eq!(wages.len(), 3);
    for id in 2..=4 {
        assert_eq!(wages.get(&id), Some(&109_440), "employee {id}");
    }
}

#[test]
fn test_totals_match_manual_sums() {
    let source = MemorySource::new(roster(5), 7);
    let opts = AggregationOptions {
        workers: 3,
        salary_per_hour: 41,
        ..AggregationOptions::default()
    };

    let wages = YearlyWageAggregator::new(&source, opts)
        .aggregate("2023")
        .unwrap();

    for emp in source.employees.iter().filter(|e| e.id != 1) {
        assert_eq!(
            wages[&emp.id],
            manual_total(&source, emp.id, 2023, 41),
            "employee {}",
            emp.id
        );
    }
}

#[test]
fn test_admin_is_excluded_by_id_and_by_name() {
    let mut employees = roster(2);
    employees.push(Employee::new(9, "Boss", "Admin", "boss@example.com", "secret"));
    employees.push(Employee::new(10, "Admin", "Jane", "jane@example.com", "secret"));
    let source = MemorySource::new(employees, 8);

    let wages = get_yearly_wages_of_all_employees(&source, "2024", options(4)).unwrap();

    assert!(!wages.contains_key(&1));
    assert!(!wages.contains_key(&9));
    assert!(!wages.contains_key(&10));
    assert_eq!(wages.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_custom_admin_id_and_marker() {
    let mut employees = roster(3);
    employees.push(Employee::new(20, "Chief", "Root", "root@example.com", "secret"));
    let source = MemorySource::new(employees, 8);
    let opts = AggregationOptions {
        workers: 2,
        admin_id: 3,
        admin_marker: "Root".to_string(),
        ..AggregationOptions::default()
    };

    let wages = get_yearly_wages_of_all_employees(&source, "2024", opts).unwrap();

    // id 1 is an ordinary employee once the admin id is moved
    assert_eq!(wages.keys().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
}

#[test]
fn test_worker_count_does_not_change_the_result() {
    let source = MemorySource::new(roster(7), 6);
    let roster_size = source.employees.len();

    let reference = get_yearly_wages_of_all_employees(&source, "2022", options(1)).unwrap();
    for workers in [2, 3, roster_size, roster_size + 5] {
        let wages = get_yearly_wages_of_all_employees(&source, "2022", options(workers)).unwrap();
        assert_eq!(wages, reference, "workers = {workers}");
    }
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let source = MemorySource::new(roster(4), 8);
    let aggregator = YearlyWageAggregator::new(&source, options(3));

    let first = aggregator.aggregate("2024").unwrap();
    let second = aggregator.aggregate("2024").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_failing_employee_yields_aggregation_error() {
    let source = MemorySource::new(roster(4), 8).failing_on(3);

    let err = get_yearly_wages_of_all_employees(&source, "2024", options(5)).unwrap_err();

    match err {
        AppError::Aggregation(inner) => {
            assert!(matches!(*inner, AppError::Storage(_)), "got {inner:?}");
        }
        other => panic!("expected an aggregation error, got {other:?}"),
    }
}

#[test]
fn test_partial_result_keeps_the_other_employees() {
    let source = MemorySource::new(roster(4), 8).failing_on(3);
    let roster_size = source.employees.len();

    let outcome = YearlyWageAggregator::new(&source, options(roster_size))
        .aggregate_partial("2024")
        .unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.roster.len(), roster_size);
    assert!(!outcome.wages.contains_key(&3));
    for id in [2, 4, 5] {
        assert_eq!(outcome.wages.get(&id), Some(&109_440), "employee {id}");
    }
    assert!(matches!(outcome.error, Some(AppError::Storage(_))));
}

#[test]
fn test_failure_stops_the_rest_of_the_chunk() {
    // single producer: everything after the failing employee is skipped
    let source = MemorySource::new(roster(4), 8).failing_on(3);

    let outcome = YearlyWageAggregator::new(&source, options(1))
        .aggregate_partial("2024")
        .unwrap();

    let expected: WageMap = [(2, 109_440)].into_iter().collect();
    assert_eq!(outcome.wages, expected);
}

#[test]
fn test_fail_fast_reports_the_error() {
    let source = MemorySource::new(roster(6), 8).failing_on(2);
    let opts = AggregationOptions {
        workers: 3,
        fail_fast: true,
        ..AggregationOptions::default()
    };

    let outcome = YearlyWageAggregator::new(&source, opts)
        .aggregate_partial("2024")
        .unwrap();

    assert!(!outcome.wages.contains_key(&2));
    assert!(matches!(outcome.error, Some(AppError::Storage(_))));
}

#[test]
fn test_panicking_worker_is_reported_without_deadlock() {
    let source = MemorySource::new(roster(3), 8).panicking_on(2);
    let roster_size = source.employees.len();

    let outcome = YearlyWageAggregator::new(&source, options(roster_size))
        .aggregate_partial("2024")
        .unwrap();

    match outcome.error {
        Some(AppError::WorkerPanic(msg)) => assert!(msg.contains("storage exploded")),
        other => panic!("expected a worker panic, got {other:?}"),
    }
    assert!(!outcome.wages.contains_key(&2));
    assert_eq!(outcome.wages.get(&3), Some(&109_440));
    assert_eq!(outcome.wages.get(&4), Some(&109_440));
}

#[test]
fn test_wage_overflow_is_reported() {
    let source = MemorySource::new(roster(1), 8);
    let opts = AggregationOptions {
        workers: 1,
        salary_per_hour: i64::MAX / 4,
        ..AggregationOptions::default()
    };

    let err = get_yearly_wages_of_all_employees(&source, "2024", opts).unwrap_err();

    assert!(matches!(err.root_cause(), AppError::WageOverflow(2)));
}

#[test]
fn test_invalid_year_is_rejected() {
    let source = MemorySource::new(roster(2), 8);

    for year in ["24", "20245", "abcd", ""] {
        let err = get_yearly_wages_of_all_employees(&source, year, options(2)).unwrap_err();
        assert!(matches!(err, AppError::InvalidYear(_)), "year {year:?}");
    }
}

#[test]
fn test_empty_roster_and_admin_only_roster() {
    let empty = MemorySource::new(Vec::new(), 8);
    assert!(
        get_yearly_wages_of_all_employees(&empty, "2024", options(4))
            .unwrap()
            .is_empty()
    );

    let admin_only = MemorySource::new(roster(0), 8);
    assert!(
        get_yearly_wages_of_all_employees(&admin_only, "2024", options(4))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_days_off_count_as_zero() {
    let source = MemorySource::new(roster(2), 0);

    let wages = get_yearly_wages_of_all_employees(&source, "2024", options(2)).unwrap();

    assert_eq!(wages.get(&2), Some(&0));
    assert_eq!(wages.get(&3), Some(&0));
}

#[test]
fn test_yearly_batch_lists_months_in_order() {
    let source = MemorySource::new(roster(1), 8);

    let batch = yearly_batch(&source, 2, 2024, 38).unwrap();

    assert_eq!(batch.employee_id, 2);
    assert_eq!(batch.salaries.len(), 360);
    for (k, block) in batch.salaries.chunks(30).enumerate() {
        let month = k as u32 + 1;
        assert_eq!(
            block[0].entry.date,
            NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            "block {k}"
        );
        for pair in block.windows(2) {
            assert_eq!(pair[0].entry.date.succ_opt(), Some(pair[1].entry.date));
        }
        assert!(block.iter().all(|s| s.employee_id() == 2));
    }

    // the last block starts on December 1st and stays in the same year
    let last = batch.salaries.last().unwrap();
    assert_eq!((last.entry.date.year(), last.entry.date.month()), (2024, 12));
}
