use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn items_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Hex bolt", "description": "M8 zinc plated", "category": "fasteners"}},
            {{"name": "Anchor", "description": "Concrete", "category": "fasteners"}},
            {{"name": "Wrench", "description": "Adjustable", "category": "tools"}},
            {{"name": "Bolt cutter", "description": "Heavy duty", "category": "tools"}}
        ]"#
    )
    .unwrap();
    file
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("carousel"))
        .stdout(predicate::str::contains("markup"));

    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.args(["carousel", "play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--for"));
}

#[test]
fn catalog_filters_and_reports_url() {
    let items = items_file();
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.arg("catalog")
        .arg("--items")
        .arg(items.path())
        .args(["--url", "https://shop.example/catalog.html"])
        .args(["--search", "BOLT", "--sort", "tools=name-desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fasteners\n  - Hex bolt\ntools\n  - Bolt cutter\n",
        ))
        .stdout(predicate::str::contains("Showing 2 of 4 products"))
        .stdout(predicate::str::contains("?search=bolt&sort="));
}

#[test]
fn catalog_restores_state_from_url() {
    let items = items_file();
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.arg("catalog")
        .arg("--items")
        .arg(items.path())
        .args(["--url", "https://shop.example/catalog.html?category=tools"])
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category": "tools""#))
        .stdout(predicate::str::contains(r#""visible": 2"#));
}

#[test]
fn catalog_rejects_bad_sort_argument() {
    let items = items_file();
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.arg("catalog")
        .arg("--items")
        .arg(items.path())
        .args(["--sort", "tools=price"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price"));
}

#[test]
fn carousel_script_prints_transcript() {
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.args(["carousel", "run", "--script", "wait:3s, click-next, wait:6s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start      slide 1/5"))
        .stdout(predicate::str::contains("wait:3s     slide 2/5 [auto-playing]"))
        .stdout(predicate::str::contains("click-next  slide 3/5 [paused]"));
}

#[test]
fn carousel_long_waits_finish() {
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.args(["carousel", "run", "--script", "wait:1000years, click-next"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("click-next"));
}

#[test]
fn carousel_plays_in_real_time() {
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.args(["carousel", "play", "--for", "50ms", "--tick", "10ms"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("slide 1/5  Welcome\n"));
}

#[test]
fn carousel_script_errors_are_reported() {
    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.args(["carousel", "run", "--script", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step `teleport`"));
}

#[test]
fn config_file_changes_the_deck() {
    let mut config = NamedTempFile::new().unwrap();
    write!(
        config,
        r#"
[slider]
show_progress_bar = false

[[slides]]
id = 7
title = "Clearance"
description = "Last units"
cta_label = "Shop now"
cta_target = "catalog.html"
background_image = "img/clearance.jpg"
"#
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("showcasectl");
    cmd.arg("--config")
        .arg(config.path())
        .arg("markup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clearance"))
        .stdout(predicate::str::contains("Welcome").not());
}
