//! Tests for the manager commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

struct Fixture {
    env: TestEnv,
    manager: i64,
    hotel: String,
}

fn fixture() -> Fixture {
    let env = TestEnv::initialized();
    let manager = env.seed_manager("Owner");
    let hotel = env.add_hotel(manager, 0.0, 0.0);
    env.add_room(hotel, 1, 100.0);
    Fixture {
        env,
        manager,
        hotel: hotel.to_string(),
    }
}

#[test]
fn test_update_room_and_list_updates() {
    let f = fixture();
    f.env
        .command_as("update-room", f.manager)
        .args([
            "--hotel",
            &f.hotel,
            "--room",
            "1",
            "--price",
            "120.5",
            "--image-url",
            "https://img.example/1.jpg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated room 1"));

    f.env
        .command()
        .args(["rooms", "--hotel", &f.hotel, "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120.50"));

    f.env
        .command_as("updates", f.manager)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("hotel {} room 1", f.hotel)));
}

#[test]
fn test_customer_cannot_update_room() {
    let f = fixture();
    let customer = f.env.register("Sneaky");
    f.env
        .command_as("update-room", customer)
        .args([
            "--hotel",
            &f.hotel,
            "--room",
            "1",
            "--price",
            "1",
            "--image-url",
            "x",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not authorized"));

    f.env
        .command_as("updates", f.manager)
        .assert()
        .success()
        .stdout(predicate::str::contains("No room updates"));
}

#[test]
fn test_updates_scope() {
    let f = fixture();
    let rival = f.env.seed_manager("Rival");
    let rival_hotel = f.env.add_hotel(rival, 9.0, 9.0);
    f.env.add_room(rival_hotel, 7, 70.0);
    f.env
        .command_as("update-room", rival)
        .args([
            "--hotel",
            &rival_hotel.to_string(),
            "--room",
            "7",
            "--price",
            "75",
            "--image-url",
            "r.jpg",
        ])
        .assert()
        .success();

    f.env
        .command_as("updates", f.manager)
        .assert()
        .success()
        .stdout(predicate::str::contains("No room updates"));
    f.env
        .command_as("updates", f.manager)
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("hotel {rival_hotel} room 7")));
}

#[test]
fn test_history_and_regulars() {
    let f = fixture();
    let ann = f.env.register("Ann");
    let bob = f.env.register("Bob");
    for (customer, date) in [(ann, "2024-03-01"), (bob, "2024-03-02"), (bob, "2024-03-05")] {
        f.env
            .command_as("book", customer)
            .args(["--hotel", &f.hotel, "--room", "1", "--date", date])
            .assert()
            .success();
    }

    let output = f
        .env
        .command_as("history", f.manager)
        .args(["--from", "2024-03-01", "--to", "2024-03-02"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    assert!(lines[0].contains("2024-03-02") && lines[0].contains("Bob"));
    assert!(lines[1].contains("2024-03-01") && lines[1].contains("Ann"));

    let output = f
        .env
        .command_as("regulars", f.manager)
        .args(["--hotel", &f.hotel])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines, [format!("{bob}\tBob\t2"), format!("{ann}\tAnn\t1")]);
}

#[test]
fn test_history_rejects_reversed_range() {
    let f = fixture();
    f.env
        .command_as("history", f.manager)
        .args(["--from", "2024-03-05", "--to", "2024-03-01"])
        .assert()
        .code(4);
}

#[test]
fn test_repair_and_repairs() {
    let f = fixture();
    let company = f.env.add_company("Fixers").to_string();

    f.env
        .command_as("repair", f.manager)
        .args([
            "--hotel", &f.hotel, "--room", "1", "--company", &company, "--date", "2024-04-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested repair"));

    f.env
        .command_as("repairs", f.manager)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04-04"))
        .stdout(predicate::str::contains(format!("company {company}")));

    f.env
        .command_as("repair", f.manager)
        .args([
            "--hotel", &f.hotel, "--room", "1", "--company", "999", "--date", "2024-04-05",
        ])
        .assert()
        .code(1);
}
