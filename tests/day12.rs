use assert_cmd::Command;
use day11_12_15_16::garden::{Error, Garden, Pricing};
use day11_12_15_16::grid;
use predicates::prelude::predicate::str;

#[test]
fn day12_output_right_answer() {
    let mut cmd = Command::cargo_bin("day12").unwrap();
    cmd.arg("--path").arg("inputs/day12_large.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Total fencing price: 1930"));
}

#[test]
fn day12_output_right_discounted_answer() {
    let mut cmd = Command::cargo_bin("day12").unwrap();
    cmd.arg("-p").arg("inputs/day12_large.txt").arg("--discount");

    cmd.assert()
        .success()
        .stdout(str::contains("Total fencing price: 1206"));
}

#[test]
fn day12_enclosed_regions() {
    let mut cmd = Command::cargo_bin("day12").unwrap();
    cmd.arg("--path").arg("inputs/day12_enclosed.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Total fencing price: 772"));
}

#[test]
fn day12_missing_file_fails() {
    let mut cmd = Command::cargo_bin("day12").unwrap();
    cmd.arg("--path").arg("inputs/no_such_garden.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}

#[test]
fn regions_of_small_garden() {
    let garden = Garden::try_from("AAAA\nBBCD\nBBCC\nEEEC\n").unwrap();
    let regions = garden.regions();

    assert_eq!(regions.len(), 5);
    let a = regions.iter().find(|r| r.plant() == 'A').unwrap();
    assert_eq!((a.area(), a.perimeter(), a.sides_n()), (4, 10, 4));
    let c = regions.iter().find(|r| r.plant() == 'C').unwrap();
    assert_eq!((c.area(), c.perimeter(), c.sides_n()), (4, 10, 8));
    assert_eq!(garden.total_price(Pricing::Perimeter), 140);
    assert_eq!(garden.total_price(Pricing::BulkDiscount), 80);
}

#[test]
fn discount_counts_inner_sides() {
    let e_shape = Garden::try_from("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n").unwrap();
    assert_eq!(e_shape.total_price(Pricing::BulkDiscount), 236);

    let holes = Garden::try_from("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n").unwrap();
    assert_eq!(holes.total_price(Pricing::BulkDiscount), 368);
}

#[test]
fn same_plant_apart_makes_two_regions() {
    let garden = Garden::try_from("ABA\n").unwrap();
    let regions = garden.regions();

    assert_eq!(regions.len(), 3);
    assert_eq!(regions.iter().filter(|r| r.plant() == 'A').count(), 2);
}

#[test]
fn non_square_garden() {
    let garden = Garden::try_from("AAB\nABB\n").unwrap();

    assert_eq!(garden.total_price(Pricing::Perimeter), 48);
    assert_eq!(garden.total_price(Pricing::BulkDiscount), 36);
}

#[test]
fn parse_rejects_ragged_rows() {
    assert!(matches!(
        Garden::try_from("AA\nA\n"),
        Err(Error::Grid(grid::Error::InconsistentRow(2, 1)))
    ));
    assert!(matches!(Garden::try_from("\n"), Err(Error::EmptyGarden)));
}

#[test]
fn day12_small_garden_with_discount() {
    let mut cmd = Command::cargo_bin("day12").unwrap();
    cmd.arg("--path")
        .arg("inputs/day12_small.txt")
        .arg("--discount")
        .arg("--debug");

    cmd.assert()
        .success()
        .stdout(str::contains("Total fencing price: 80"))
        .stderr(str::contains("Found region"));
}
