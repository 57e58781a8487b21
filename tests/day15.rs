use assert_cmd::Command;
use day11_12_15_16::grid::{Direction, Position};
use day11_12_15_16::warehouse::{self, Error, Tile};
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day15_part1").unwrap();
    cmd.arg("--path").arg("inputs/day15_large.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Sum of all boxes' GPS coordinates: 10092"));
}

#[test]
fn part1_small_warehouse() {
    let mut cmd = Command::cargo_bin("day15_part1").unwrap();
    cmd.arg("--path").arg("inputs/day15_small.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Sum of all boxes' GPS coordinates: 2028"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day15_part2").unwrap();
    cmd.arg("--path").arg("inputs/day15_large.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Sum of all boxes' GPS coordinates: 9021"));
}

#[test]
fn part2_debug_logs_to_stderr() {
    let mut cmd = Command::cargo_bin("day15_part2").unwrap();
    cmd.arg("--path").arg("inputs/day15_wide.txt").arg("--debug");

    cmd.assert()
        .success()
        .stdout(str::contains("Sum of all boxes' GPS coordinates: 618"))
        .stderr(str::contains("##...[].##..##"));
}

#[test]
fn widen_doubles_columns() {
    let (warehouse, moves) = warehouse::parse_game("#####\n#@O.#\n#####\n\n>\n").unwrap();
    let wide = warehouse.widen();

    assert_eq!(moves, vec![Direction::Right]);
    assert_eq!(wide.robot_pos(), Position::new(1, 2));
    assert_eq!(
        wide.to_string(),
        "##########\n##@.[]..##\n##########\n"
    );
}

#[test]
fn push_chain_of_boxes() {
    let (mut warehouse, _) = warehouse::parse_game("#######\n#@OO..#\n#######\n").unwrap();

    assert!(warehouse.try_move(Direction::Right));
    assert_eq!(warehouse.to_string(), "#######\n#.@OO.#\n#######\n");
    assert!(warehouse.try_move(Direction::Right));
    assert!(!warehouse.try_move(Direction::Right));
    assert_eq!(warehouse.robot_pos(), Position::new(1, 3));
    assert_eq!(warehouse.gps_sum(), 104 + 105);
}

#[test]
fn box_against_wall_stays() {
    let (mut warehouse, moves) = warehouse::parse_game("#####\n#@O##\n#####\n\n>\n").unwrap();

    assert_eq!(warehouse.run(&moves), 0);
    assert_eq!(warehouse.robot_pos(), Position::new(1, 1));
    assert_eq!(warehouse.gps_sum(), 102);
}

#[test]
fn wide_box_blocked_by_wall_above_one_half() {
    let text = "#######\n#..#..#\n#.....#\n#..O..#\n#..@..#\n#.....#\n#######\n\n^^\n";
    let (warehouse, moves) = warehouse::parse_game(text).unwrap();
    let mut narrow = warehouse.clone();
    let mut wide = warehouse.widen();

    assert_eq!(narrow.run(&moves), 1);
    assert_eq!(narrow.gps_sum(), 203);
    assert_eq!(wide.run(&moves), 1);
    assert_eq!(wide.robot_pos(), Position::new(3, 6));
    assert_eq!(wide.tile(&Position::new(2, 6)), Some(Tile::BoxLeft));
    assert_eq!(wide.tile(&Position::new(2, 7)), Some(Tile::BoxRight));
    assert_eq!(wide.gps_sum(), 206);
}

#[test]
fn moves_span_lines() {
    let (_, moves) = warehouse::parse_game("###\n#@#\n###\n\n<^\nv>\n").unwrap();

    assert_eq!(
        moves,
        vec![
            Direction::Left,
            Direction::Up,
            Direction::Down,
            Direction::Right
        ]
    );
}

#[test]
fn parse_rejects_bad_warehouses() {
    assert!(matches!(
        warehouse::parse_game("#.#\n#O#\n"),
        Err(Error::NoRobotInMap)
    ));
    assert!(matches!(
        warehouse::parse_game("#@@#\n"),
        Err(Error::MultipleRobots(_, _))
    ));
    assert!(matches!(
        warehouse::parse_game("#@x#\n"),
        Err(Error::InvalidCharForMap('x'))
    ));
    assert!(matches!(
        warehouse::parse_game("#@.#\n\n<x\n"),
        Err(Error::Grid(_))
    ));
}
