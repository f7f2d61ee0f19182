use chrono::NaiveDate;
use rworklog::core::calculator::grid::{
    HoursByKey, HoursKey, LoggedHours, aggregate, column_totals, row_hours,
};
use rworklog::core::grid::GridView;
use rworklog::models::assignment_row::AssignmentRow;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn logged(entries: &[(i64, i64, &str, f64)]) -> HoursByKey {
    entries
        .iter()
        .enumerate()
        .map(|(i, (task, user, date, hours))| {
            (
                HoursKey::new(*task, *user, *date),
                LoggedHours {
                    id: i as i64 + 1,
                    hours: *hours,
                },
            )
        })
        .collect()
}

#[test]
fn single_row_subtotals_are_zero_filled() {
    let rows = vec![AssignmentRow::from_ids(1, 10, 100, 1000)];
    let dates = vec![d("2026-01-20"), d("2026-01-21")];
    let hours = logged(&[(100, 1000, "2026-01-20", 2.0)]);

    let (projects, issues) = aggregate(&rows, &dates, &hours);

    let p = &projects[&1];
    assert_eq!(p.get("2026-01-20"), 2.0);
    assert_eq!(p.get("2026-01-21"), 0.0);
    assert_eq!(p.per_date.len(), 2);
    assert_eq!(p.total, 2.0);

    assert_eq!(&issues[&(1, 10)], p);
}

#[test]
fn total_equals_sum_of_dates() {
    let rows = vec![
        AssignmentRow::from_ids(1, 10, 100, 1000),
        AssignmentRow::from_ids(1, 10, 101, 1000),
        AssignmentRow::from_ids(1, 11, 102, 1001),
        AssignmentRow::from_ids(2, 20, 200, 1000),
    ];
    let dates: Vec<NaiveDate> = (19..=25).map(|day| d(&format!("2026-01-{day}"))).collect();
    let hours = logged(&[
        (100, 1000, "2026-01-19", 1.25),
        (101, 1000, "2026-01-19", 0.75),
        (102, 1001, "2026-01-22", 7.5),
        (200, 1000, "2026-01-25", 0.25),
        (200, 1000, "2026-01-20", 3.0),
    ]);

    let (projects, issues) = aggregate(&rows, &dates, &hours);

    for t in projects.values().chain(issues.values()) {
        let sum: f64 = dates
            .iter()
            .map(|dt| t.get(&dt.format("%Y-%m-%d").to_string()))
            .sum();
        assert_eq!(t.total, sum);
    }
    assert_eq!(projects[&1].total, 9.5);
    assert_eq!(projects[&2].total, 3.25);
    assert_eq!(issues[&(1, 10)].get("2026-01-19"), 2.0);
    assert_eq!(issues[&(1, 11)].total, 7.5);
}

#[test]
fn negative_hours_subtract_and_keep_the_total_consistent() {
    let rows = vec![
        AssignmentRow::from_ids(1, 10, 100, 1000),
        AssignmentRow::from_ids(1, 10, 101, 1000),
    ];
    let dates = vec![d("2026-01-20"), d("2026-01-21")];
    let hours = logged(&[
        (100, 1000, "2026-01-20", 3.0),
        (101, 1000, "2026-01-20", -1.0),
        (100, 1000, "2026-01-21", -0.5),
    ]);

    let (projects, issues) = aggregate(&rows, &dates, &hours);

    let p = &projects[&1];
    assert_eq!(p.get("2026-01-20"), 2.0);
    assert_eq!(p.get("2026-01-21"), -0.5);
    assert_eq!(p.total, 1.5);
    assert_eq!(p.total, p.per_date.values().sum::<f64>());
    assert_eq!(&issues[&(1, 10)], p);
}

#[test]
fn dates_without_hours_are_zero_everywhere() {
    let rows = vec![
        AssignmentRow::from_ids(1, 10, 100, 1000),
        AssignmentRow::from_ids(2, 20, 200, 1001),
    ];
    let dates = vec![d("2026-02-02"), d("2026-02-03"), d("2026-02-04")];
    let hours = logged(&[(100, 1000, "2026-02-03", 4.0)]);

    let (projects, _) = aggregate(&rows, &dates, &hours);

    for t in projects.values() {
        assert_eq!(t.get("2026-02-02"), 0.0);
        assert_eq!(t.get("2026-02-04"), 0.0);
    }
}

#[test]
fn hours_outside_the_dates_are_ignored() {
    let rows = vec![AssignmentRow::from_ids(1, 10, 100, 1000)];
    let dates = vec![d("2026-03-02")];
    let hours = logged(&[
        (100, 1000, "2026-03-01", 5.0),
        (100, 1000, "2026-03-02", 1.0),
        // not an assignment of the rows
        (100, 9999, "2026-03-02", 8.0),
    ]);

    let (projects, _) = aggregate(&rows, &dates, &hours);
    assert_eq!(projects[&1].total, 1.0);
}

#[test]
fn aggregate_is_repeatable() {
    let rows = vec![
        AssignmentRow::from_ids(1, 10, 100, 1000),
        AssignmentRow::from_ids(1, 11, 101, 1000),
    ];
    let dates = vec![d("2026-01-20"), d("2026-01-21")];
    let hours = logged(&[
        (100, 1000, "2026-01-20", 0.5),
        (101, 1000, "2026-01-21", 2.25),
    ]);

    assert_eq!(
        aggregate(&rows, &dates, &hours),
        aggregate(&rows, &dates, &hours)
    );
}

#[test]
fn empty_dates_give_empty_totals() {
    let rows = vec![AssignmentRow::from_ids(1, 10, 100, 1000)];
    let hours = logged(&[(100, 1000, "2026-01-20", 2.0)]);

    let (projects, issues) = aggregate(&rows, &[], &hours);

    assert!(projects[&1].per_date.is_empty());
    assert_eq!(projects[&1].total, 0.0);
    assert_eq!(issues[&(1, 10)].total, 0.0);
}

#[test]
fn no_rows_no_entries() {
    let dates = vec![d("2026-01-20")];
    let hours = logged(&[(100, 1000, "2026-01-20", 2.0)]);

    let (projects, issues) = aggregate(&[], &dates, &hours);
    assert!(projects.is_empty());
    assert!(issues.is_empty());
}

#[test]
fn repeated_pair_is_counted_per_row() {
    let row = AssignmentRow::from_ids(1, 10, 100, 1000);
    let rows = vec![row.clone(), row];
    let dates = vec![d("2026-01-20")];
    let hours = logged(&[(100, 1000, "2026-01-20", 1.5)]);

    let (projects, _) = aggregate(&rows, &dates, &hours);
    assert_eq!(projects[&1].total, 3.0);
}

#[test]
fn row_and_column_totals_match_project_sum() {
    let rows = vec![
        AssignmentRow::from_ids(1, 10, 100, 1000),
        AssignmentRow::from_ids(2, 20, 200, 1000),
    ];
    let dates = vec![d("2026-01-20"), d("2026-01-21")];
    let hours = logged(&[
        (100, 1000, "2026-01-20", 2.0),
        (200, 1000, "2026-01-21", 0.25),
    ]);

    let first = row_hours(&rows[0], &dates, &hours);
    assert_eq!(first.total, 2.0);
    assert_eq!(first.get("2026-01-21"), 0.0);

    let columns = column_totals(&rows, &dates, &hours);
    assert_eq!(columns.get("2026-01-20"), 2.0);
    assert_eq!(columns.get("2026-01-21"), 0.25);
    assert_eq!(columns.total, 2.25);
}

#[test]
fn grid_view_renders_subtotals_and_weekdays() {
    let mut row = AssignmentRow::from_ids(1, 10, 100, 1000);
    row.project_cd = "PJ1".into();
    row.project_name = "Alpha".into();
    row.issue_cd = "I1".into();
    row.issue_name = "Login".into();
    row.task_cd = "T1".into();
    row.task_name = "Design".into();
    row.user_name = "Alice".into();
    row.progress_rate = Some(40);

    let dates = vec![d("2026-01-20"), d("2026-01-21")];
    let hours = logged(&[(100, 1000, "2026-01-20", 2.0)]);
    let view = GridView::build(dates, vec![row], hours);

    let names = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"].map(String::from);
    let out = view.render(&names);

    assert!(out.contains("01/20(Tu)"));
    assert!(out.contains("01/21(We)"));
    assert!(out.contains("PJ1 Alpha"));
    assert!(out.contains("  I1 Login"));
    assert!(out.contains("    T1 Design"));
    assert!(out.contains("40%"));
    assert!(out.contains("2.00"));

    let last = out.lines().last().unwrap();
    assert!(last.starts_with("Total"));
    assert!(last.contains("2.00"));
    assert!(last.contains('-'));
}
