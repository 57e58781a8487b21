use assert_cmd::Command;
use day11_12_15_16::stone::{self, Change, Error, StoneLine};
use predicates::prelude::predicate::str;

#[test]
fn day11_output_right_answer() {
    let mut cmd = Command::cargo_bin("day11").unwrap();
    cmd.arg("--blinks").arg("25");

    cmd.assert()
        .success()
        .stdout(str::contains("Total number of resulting stones: 55312"));
}

#[test]
fn day11_reads_stones_from_file() {
    let mut cmd = Command::cargo_bin("day11").unwrap();
    cmd.arg("--path").arg("inputs/day11.txt").arg("-b").arg("6");

    cmd.assert()
        .success()
        .stdout(str::contains("Total number of resulting stones: 22"));
}

#[test]
fn day11_rejects_invalid_stone() {
    let mut cmd = Command::cargo_bin("day11").unwrap();
    cmd.arg("--input").arg("12 ab");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid text(ab) for stone."));
}

#[test]
fn change_follows_engraving_rules() {
    assert_eq!(stone::change(0).unwrap(), Change::Replace(1));
    assert_eq!(stone::change(1).unwrap(), Change::Replace(2024));
    assert_eq!(stone::change(1000).unwrap(), Change::Split(10, 0));
    assert_eq!(stone::change(253000).unwrap(), Change::Split(253, 0));
    assert_eq!(stone::change(99).unwrap(), Change::Split(9, 9));
}

#[test]
fn change_reports_overflow() {
    let n = 1_000_000_000_000_000_000;
    assert!(matches!(stone::change(n), Err(Error::NumberOverflow(m)) if m == n));
}

#[test]
fn blink_once_splits_and_multiplies() {
    let mut stones = StoneLine::try_from("0 1 10 99 999").unwrap();
    stones.blink().unwrap();

    assert_eq!(stones.total().unwrap(), 7);
    assert_eq!(stones.count_of(9), 2);
    assert_eq!(stones.count_of(2021976), 1);
    assert_eq!(stones.count_of(0), 1);
}

#[test]
fn blink_many_times_counts_without_expanding() {
    let mut stones = StoneLine::try_from("125 17").unwrap();
    stones.blink_n(75).unwrap();

    assert_eq!(stones.total().unwrap(), 65601038650482);
}

#[test]
fn blink_zero_times_keeps_stones() {
    let mut stones = StoneLine::try_from("7 7 3").unwrap();
    let before = stones.clone();
    stones.blink_n(0).unwrap();

    assert_eq!(stones, before);
    assert_eq!(stones.total().unwrap(), 3);
    assert_eq!(stones.distinct_n(), 2);
}

#[test]
fn parse_rejects_bad_lines() {
    assert!(matches!(StoneLine::try_from("   "), Err(Error::NoStones)));
    assert!(matches!(
        StoneLine::try_from("1 -2"),
        Err(Error::InvalidStoneText(s)) if s == "-2"
    ));
}
