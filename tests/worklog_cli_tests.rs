use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, ok, rwl, setup_test_db, temp_out, write_template};

#[test]
fn hours_are_logged_updated_and_removed() {
    let db_path = setup_test_db("hours_lifecycle");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u1", "2026-01-20", "2.5"])
        .assert()
        .success()
        .stdout(contains("Logged 2.50h"));

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u1", "2026-01-20", "3"])
        .assert()
        .success()
        .stdout(contains("Updated work log #1"));

    rwl()
        .args(["--db", &db_path, "hours", "total", "--user", "u1", "--date", "2026-01-20"])
        .assert()
        .success()
        .stdout(contains("u1 2026-01-20: 3.00h"));

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u1", "2026-01-20", "0"])
        .assert()
        .success()
        .stdout(contains("Removed"));

    rwl()
        .args(["--db", &db_path, "hours", "total", "--user", "u1", "--month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("u1 2026-01: 0.00h"));
}

#[test]
fn hours_off_the_quarter_grid_are_rejected() {
    let db_path = setup_test_db("hours_step");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u1", "2026-01-20", "1.3"])
        .assert()
        .failure()
        .stderr(contains("multiple of 0.25"));

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u1", "2026-01-20", "-1"])
        .assert()
        .failure()
        .stderr(contains("must not be negative"));
}

#[test]
fn hours_need_an_assignment() {
    let db_path = setup_test_db("hours_unassigned");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u2", "2026-01-20", "1"])
        .assert()
        .failure()
        .stderr(contains("not assigned"));

    ok(&db_path, &["assign", "toggle", "1", "u2"]);

    rwl()
        .args(["--db", &db_path, "hours", "set", "1", "u2", "2026-01-20", "1"])
        .assert()
        .success();
}

#[test]
fn inactive_users_disappear_from_the_grid() {
    let db_path = setup_test_db("grid_inactive");
    init_db_with_data(&db_path);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "2.5"]);

    rwl()
        .args(["--db", &db_path, "grid", "--week", "2026-01-20"])
        .assert()
        .success()
        .stdout(contains("01/20(火)"))
        .stdout(contains("01/25(日)"))
        .stdout(contains("PJ1 Project One"))
        .stdout(contains("T1 Design"))
        .stdout(contains("2.50"));

    ok(&db_path, &["user", "deactivate", "u1"]);

    rwl()
        .args(["--db", &db_path, "grid", "--week", "2026-01-20"])
        .assert()
        .success()
        .stdout(contains("No assignments").and(contains("T1 Design").not()));
}

#[test]
fn month_grid_has_every_day() {
    let db_path = setup_test_db("grid_month");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "grid", "--month", "2026-02", "--user", "u1"])
        .assert()
        .success()
        .stdout(contains("02/01(日)"))
        .stdout(contains("02/28(土)"))
        .stdout(contains("02/29").not());
}

#[test]
fn report_uses_file_then_saved_then_default_template() {
    let db_path = setup_test_db("report_templates");
    init_db_with_data(&db_path);
    ok(&db_path, &["task", "progress", "1", "40"]);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "2.5"]);
    ok(&db_path, &["hours", "set", "2", "u1", "2026-01-20", "1"]);

    let tmpl = write_template(
        "report_templates",
        "{date} {user_name}\r\n@project [{project_cd}]\r\n@task {task_name} {hours}h ({progress}%)\r\n",
    );

    rwl()
        .args([
            "--db", &db_path, "report", "--user", "u1", "--date", "2026-01-20", "--template", &tmpl,
            "--hide-zero",
        ])
        .assert()
        .success()
        .stdout(contains("2026/01/20 Alice"))
        .stdout(contains("[PJ1]"))
        .stdout(contains("Design 2.50h (40%)"))
        .stdout(contains("Build 1.00h\n"))
        .stdout(contains("\r").not());

    rwl()
        .args(["--db", &db_path, "report", "--user", "u1", "--template", &tmpl, "--save-template"])
        .assert()
        .success()
        .stdout(contains("Saved"));

    rwl()
        .args(["--db", &db_path, "report", "--user", "u1", "--date", "2026-01-20"])
        .assert()
        .success()
        .stdout(contains("Build 1.00h (0%)"));

    ok(&db_path, &["report", "--user", "u1", "--reset-template"]);

    rwl()
        .args(["--db", &db_path, "report", "--user", "u1", "--date", "2026-01-21"])
        .assert()
        .success()
        .stdout(contains("業務終了します。"))
        .stdout(contains("(実績なし)"));
}

#[test]
fn plan_compares_planned_and_actual() {
    let db_path = setup_test_db("plan_month");
    init_db_with_data(&db_path);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "2.5"]);

    rwl()
        .args(["--db", &db_path, "plan", "set", "u1", "PJ1", "2026-01", "80"])
        .assert()
        .success()
        .stdout(contains("Planned 80.0h"));

    rwl()
        .args(["--db", &db_path, "plan", "show", "--month", "2026-01", "--detail"])
        .assert()
        .success()
        .stdout(contains("80.00"))
        .stdout(contains("0.50"))
        .stdout(contains("2.5h"))
        .stdout(contains("77.5h"))
        .stdout(contains("3%"));

    rwl()
        .args(["--db", &db_path, "plan", "set", "u1", "PJ1", "2026-01", "-5"])
        .assert()
        .failure()
        .stderr(contains("must not be negative"));

    rwl()
        .args(["--db", &db_path, "plan", "set", "u1", "PJ1", "2026-01", "0"])
        .assert()
        .success()
        .stdout(contains("Removed"));
}

#[test]
fn inactive_users_keep_plans_but_get_no_new_ones() {
    let db_path = setup_test_db("plan_inactive");
    init_db_with_data(&db_path);
    ok(&db_path, &["plan", "set", "u1", "PJ1", "2026-01", "40"]);
    ok(&db_path, &["user", "deactivate", "u1"]);
    ok(&db_path, &["user", "deactivate", "u2"]);

    rwl()
        .args(["--db", &db_path, "plan", "set", "u2", "PJ1", "2026-01", "40"])
        .assert()
        .failure()
        .stderr(contains("inactive"));

    rwl()
        .args(["--db", &db_path, "plan", "set", "u1", "PJ1", "2026-01", "60"])
        .assert()
        .success()
        .stdout(contains("Planned 60.0h"));

    rwl()
        .args(["--db", &db_path, "plan", "set", "u1", "PJ1", "2026-01", "0"])
        .assert()
        .success()
        .stdout(contains("Removed"));
}

#[test]
fn inactive_users_can_be_unassigned_but_not_assigned() {
    let db_path = setup_test_db("assign_inactive");
    init_db_with_data(&db_path);
    ok(&db_path, &["user", "deactivate", "u1"]);
    ok(&db_path, &["user", "deactivate", "u2"]);

    rwl()
        .args(["--db", &db_path, "assign", "toggle", "1", "u1"])
        .assert()
        .success()
        .stdout(contains("removed from task #1"));

    rwl()
        .args(["--db", &db_path, "assign", "toggle", "1", "u1"])
        .assert()
        .failure()
        .stderr(contains("inactive"));

    rwl()
        .args(["--db", &db_path, "assign", "add", "1", "u2"])
        .assert()
        .failure()
        .stderr(contains("inactive"));
}

#[test]
fn assigning_twice_keeps_the_first_assignment() {
    let db_path = setup_test_db("assign_twice");
    init_db_with_data(&db_path);

    // u1 on task 1 is assignment #1
    rwl()
        .args(["--db", &db_path, "assign", "add", "1", "u1"])
        .assert()
        .success()
        .stdout(contains("(id 1)"));

    rwl()
        .args(["--db", &db_path, "assign", "list", "PJ1"])
        .assert()
        .success()
        .stdout(contains("T1").count(1));
}

#[test]
fn user_attributes_lifecycle() {
    let db_path = setup_test_db("user_attributes");
    init_db_with_data(&db_path);

    ok(&db_path, &["attr", "type", "add", "dept", "Department"]);
    ok(&db_path, &["attr", "option", "add", "dept", "dev", "Development"]);
    ok(&db_path, &["attr", "option", "add", "dept", "ops", "Operations"]);

    rwl()
        .args(["--db", &db_path, "attr", "type", "add", "dept", "Again"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rwl()
        .args(["--db", &db_path, "user", "attr", "set", "u1", "dept", "qa"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    ok(&db_path, &["user", "attr", "set", "u1", "dept", "dev"]);
    ok(&db_path, &["user", "attr", "set", "u1", "dept", "ops"]);

    rwl()
        .args(["--db", &db_path, "user", "attr", "list", "u1"])
        .assert()
        .success()
        .stdout(contains("Operations (ops)").and(contains("Development").not()));

    rwl()
        .args(["--db", &db_path, "attr", "option", "del", "dept", "ops"])
        .assert()
        .failure()
        .stderr(contains("in use"));

    rwl()
        .args(["--db", &db_path, "attr", "type", "del", "dept"])
        .assert()
        .failure()
        .stderr(contains("in use"));

    // unused options can go
    ok(&db_path, &["attr", "option", "del", "dept", "dev"]);

    rwl()
        .args(["--db", &db_path, "user", "attr", "set", "u1", "dept"])
        .assert()
        .success()
        .stdout(contains("cleared"));

    rwl()
        .args(["--db", &db_path, "user", "attr", "list", "u1"])
        .assert()
        .success()
        .stdout(contains("no attributes"));

    ok(&db_path, &["attr", "type", "del", "dept"]);

    rwl()
        .args(["--db", &db_path, "attr", "option", "list", "dept"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn status_in_use_cannot_be_deleted() {
    let db_path = setup_test_db("status_in_use");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "status", "list", "PJ1"])
        .assert()
        .success()
        .stdout(contains("open"))
        .stdout(contains("in_progress"))
        .stdout(contains("closed"));

    rwl()
        .args(["--db", &db_path, "status", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("used by at least one issue"));

    ok(&db_path, &["status", "del", "3"]);

    rwl()
        .args(["--db", &db_path, "issue", "edit", "1", "--status", "closed"])
        .assert()
        .failure()
        .stderr(contains("closed"));
}

#[test]
fn project_crud_and_duplicates() {
    let db_path = setup_test_db("project_crud");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "project", "add", "PJ1", "Again"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    ok(&db_path, &["project", "add", "PJ2", "Second", "--description", "beta"]);

    rwl()
        .args(["--db", &db_path, "project", "list", "--q", "beta"])
        .assert()
        .success()
        .stdout(contains("PJ2").and(contains("PJ1").not()));

    rwl()
        .args(["--db", &db_path, "project", "show", "PJ1"])
        .assert()
        .success()
        .stdout(contains("Estimate"));

    ok(&db_path, &["project", "del", "PJ1", "-f"]);

    rwl()
        .args(["--db", &db_path, "issue", "list"])
        .assert()
        .success()
        .stdout(contains("No issues found"));
}

#[test]
fn issue_list_shows_estimate_and_actual() {
    let db_path = setup_test_db("issue_estimates");
    init_db_with_data(&db_path);
    ok(&db_path, &["estimate", "add", "1", "Analysis", "4"]);
    ok(&db_path, &["estimate", "add", "1", "Coding", "6"]);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "12"]);

    rwl()
        .args(["--db", &db_path, "estimate", "list", "1"])
        .assert()
        .success()
        .stdout(contains("Analysis"))
        .stdout(contains("Total: 10.0h"));

    rwl()
        .args(["--db", &db_path, "estimate", "add", "1", "Broken", "-2"])
        .assert()
        .failure();

    rwl()
        .args(["--db", &db_path, "issue", "list", "--project", "PJ1"])
        .assert()
        .success()
        .stdout(contains("10.0h"))
        .stdout(contains("12.0h"))
        .stdout(contains("-2.0h"))
        .stdout(contains("over their estimate"));
}

#[test]
fn task_progress_is_bounded() {
    let db_path = setup_test_db("task_progress");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "task", "progress", "1", "101"])
        .assert()
        .failure()
        .stderr(contains("between 0 and 100"));

    rwl()
        .args(["--db", &db_path, "task", "progress", "1", "100"])
        .assert()
        .success();

    rwl()
        .args(["--db", &db_path, "task", "list", "1"])
        .assert()
        .success()
        .stdout(contains("100%"))
        .stdout(contains("8.0h"));
}

#[test]
fn export_csv_for_a_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "2.5"]);
    ok(&db_path, &["hours", "set", "2", "u1", "2026-02-02", "1"]);

    let out = temp_out("export_csv_month", "csv");

    rwl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026-01",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,date,user_cd"));
    assert!(content.contains("2026-01-20"));
    assert!(content.contains("Design"));
    assert!(!content.contains("2026-02-02"));
}

#[test]
fn export_json_all() {
    let db_path = setup_test_db("export_json_all");
    init_db_with_data(&db_path);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "2.5"]);

    let out = temp_out("export_json_all", "json");

    rwl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read json")).expect("valid json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_cd"], "u1");
    assert_eq!(rows[0]["hours"], 2.5);
}

#[test]
fn dashboard_and_log() {
    let db_path = setup_test_db("dashboard_log");
    init_db_with_data(&db_path);
    ok(&db_path, &["hours", "set", "1", "u1", "2026-01-20", "2.5"]);
    ok(&db_path, &["plan", "set", "u1", "PJ1", "2026-01", "10"]);

    rwl()
        .args(["--db", &db_path, "dashboard", "--date", "2026-01-20"])
        .assert()
        .success()
        .stdout(contains("2.50h"))
        .stdout(contains("Month 2026-01"))
        .stdout(contains("25%"));

    rwl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("hours"));
}

#[test]
fn backup_copies_the_database() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);
    let out = temp_out("backup_copy", "sqlite");

    rwl()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}
