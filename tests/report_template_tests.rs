use chrono::NaiveDate;
use rworklog::core::report::{
    LOGS_PLACEHOLDER, NO_ENTRIES, ReportContext, ReportLocale, TemplateLine, format_line,
    format_logs, generate_report, parse_template,
};
use rworklog::models::report_log::ReportLog;

fn log(project: &str, issue: &str, task: &str, progress: Option<i64>, hours: f64) -> ReportLog {
    ReportLog {
        project_cd: format!("{project}-cd"),
        project_name: project.to_string(),
        issue_cd: issue.to_string(),
        issue_name: format!("{issue} name"),
        task_name: task.to_string(),
        progress_rate: progress,
        hours,
    }
}

fn scenario_a() -> Vec<ReportLog> {
    vec![
        log("PJ1", "I1", "Design", Some(50), 2.0),
        log("PJ1", "I1", "Build", Some(20), 3.0),
        log("PJ2", "I2", "Test", Some(0), 1.0),
    ]
}

#[test]
fn template_without_markers_is_unchanged() {
    let t = "Hello {user_name}\n\nBye {date}\n";
    let parsed = parse_template(t);

    assert_eq!(parsed.base, t);
    assert_eq!(parsed.project_fmt, "");
    assert_eq!(parsed.issue_fmt, "");
    assert_eq!(parsed.task_fmt, "");
    assert!(!parsed.has_loop());
}

#[test]
fn duplicate_task_marker_keeps_the_last_one() {
    let parsed =
        parse_template("head\n@task first {task_name}\nmid\n@task   second {task_name}\ntail");

    assert_eq!(parsed.task_fmt, "second {task_name}");
    assert_eq!(parsed.base.matches(LOGS_PLACEHOLDER).count(), 1);
    assert_eq!(parsed.base, format!("head\n{LOGS_PLACEHOLDER}\nmid\ntail"));
}

#[test]
fn markers_are_plain_prefixes() {
    assert_eq!(
        TemplateLine::classify("@projects {project_name}"),
        TemplateLine::ProjectHeader("s {project_name}".into())
    );
    assert_eq!(
        TemplateLine::classify(" @task indented"),
        TemplateLine::Static(" @task indented".into())
    );
}

#[test]
fn hide_zero_strips_progress() {
    let l = log("PJ1", "I1", "Design", Some(0), 1.0);

    assert_eq!(format_line("{task_name} ({progress}%)", &l, true), "Design");
    assert_eq!(format_line("{task_name} ({progress}%)", &l, false), "Design (0%)");
    assert_eq!(format_line("{task_name}({progress}%)", &l, true), "Design");
    assert_eq!(format_line("{task_name} {progress}%", &l, true), "Design");
    assert_eq!(format_line("{task_name} [{progress}]", &l, true), "Design []");
}

#[test]
fn hide_zero_keeps_non_zero_progress() {
    let l = log("PJ1", "I1", "Design", Some(30), 1.0);
    assert_eq!(format_line("{task_name} ({progress}%)", &l, true), "Design (30%)");
}

#[test]
fn missing_progress_renders_as_zero() {
    let l = log("PJ1", "I1", "Design", None, 1.5);
    assert_eq!(
        format_line("{task_name} {progress}% {hours}h", &l, false),
        "Design 0% 1.50h"
    );
}

#[test]
fn unknown_placeholders_pass_through() {
    let l = log("PJ1", "I1", "Design", Some(10), 1.0);
    assert_eq!(
        format_line("{project_cd} {unknown} {issue_name}", &l, false),
        "PJ1-cd {unknown} I1 name"
    );
}

#[test]
fn empty_logs_give_the_sentinel() {
    let locale = ReportLocale::default();
    assert_eq!(format_logs(&[], "a", "b", "c", false, &locale), NO_ENTRIES);

    let custom = ReportLocale {
        no_entries: "(nothing)".into(),
        ..ReportLocale::default()
    };
    assert_eq!(format_logs(&[], "a", "b", "c", false, &custom), "(nothing)");
}

#[test]
fn scenario_a_block() {
    let out = format_logs(
        &scenario_a(),
        "{project_name}",
        "{issue_cd}",
        "{task_name}({progress}%)",
        false,
        &ReportLocale::default(),
    );

    assert_eq!(
        out.split('\n').collect::<Vec<_>>(),
        ["PJ1", "I1", "Design(50%)", "Build(20%)", "PJ2", "I2", "Test(0%)"]
    );
}

#[test]
fn issue_header_repeats_when_project_changes() {
    let logs = vec![
        log("PJ1", "I1", "A", Some(0), 1.0),
        log("PJ2", "I1", "B", Some(0), 1.0),
    ];
    let out = format_logs(
        &logs,
        "{project_name}",
        "{issue_cd}",
        "{task_name}",
        false,
        &ReportLocale::default(),
    );
    assert_eq!(out, "PJ1\nI1\nA\nPJ2\nI1\nB");
}

#[test]
fn unsorted_logs_are_not_regrouped() {
    let logs = vec![
        log("PJ1", "I1", "A", Some(0), 1.0),
        log("PJ2", "I2", "B", Some(0), 1.0),
        log("PJ1", "I1", "C", Some(0), 1.0),
    ];
    let out = format_logs(
        &logs,
        "{project_name}",
        "{issue_cd}",
        "{task_name}",
        false,
        &ReportLocale::default(),
    );
    assert_eq!(out, "PJ1\nI1\nA\nPJ2\nI2\nB\nPJ1\nI1\nC");
}

#[test]
fn empty_formats_suppress_lines() {
    let out = format_logs(
        &scenario_a(),
        "",
        "",
        "{task_name}",
        false,
        &ReportLocale::default(),
    );
    assert_eq!(out, "Design\nBuild\nTest");
}

#[test]
fn full_report_with_japanese_date() {
    let template = "{date_jp} {user_name}({user_cd})\n合計 {total_hours}h\n@project ■{project_name}\n@issue  {issue_cd}\n@task    - {task_name} ({progress}%)\n以上";
    let logs = scenario_a();
    let ctx = ReportContext {
        total_hours: 6.0,
        target_date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
        user_cd: "u1",
        user_name: "Alice",
        hide_zero: true,
    };

    let out = generate_report(template, &logs, &ctx, &ReportLocale::default());

    assert_eq!(
        out,
        "2026/01/20(火) Alice(u1)\n合計 6.0h\n■PJ1\nI1\n- Design (50%)\n- Build (20%)\n■PJ2\nI2\n- Test\n以上"
    );
}

#[test]
fn report_without_logs_uses_locale_sentinel() {
    let ctx = ReportContext {
        total_hours: 0.0,
        target_date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
        user_cd: "u1",
        user_name: "Alice",
        hide_zero: false,
    };
    let locale = ReportLocale {
        no_entries: "(none)".into(),
        weekday_names: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from),
    };

    let out = generate_report("{date_jp}\n@task {task_name}\n{total_hours}", &[], &ctx, &locale);
    assert_eq!(out, "2026/01/25(Sun)\n(none)\n0.0");
}
