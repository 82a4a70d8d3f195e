//! End-to-end runs of the command loop with scripted input.

use std::io::Cursor;

use vend_cli::{run_with, CliConfig, MenuMode};
use vend_core::{default_catalog, Money, Session};

fn drive_with(config: &CliConfig, script: &str) -> (Session, String) {
    let mut output = Vec::new();
    let session = run_with(config, Cursor::new(script.to_string()), &mut output).unwrap();
    (session, String::from_utf8(output).unwrap())
}

fn drive(script: &str) -> (Session, String) {
    drive_with(&CliConfig::default(), script)
}

fn drive_bytes(script: Vec<u8>) -> (Session, String) {
    let mut output = Vec::new();
    let session = run_with(&CliConfig::default(), Cursor::new(script), &mut output).unwrap();
    (session, String::from_utf8(output).unwrap())
}

fn stock(session: &Session) -> Vec<u32> {
    session.inventory().iter().map(|i| i.stock).collect()
}

fn fresh_stock() -> Vec<u32> {
    default_catalog().iter().map(|i| i.stock).collect()
}

#[test]
fn insert_fifty_and_twenty() {
    let (session, output) = drive("i\n50\n20\ndone\n");
    assert_eq!(session.balance(), Money::from_pence(70));
    assert!(output.contains("Balance: 70p"));
}

#[test]
fn buy_coffee_and_take_change() {
    let (session, output) = drive("I\n200\ndone\nS\nA1\ny\n");

    assert!(session.balance().is_zero());
    let mut expected = fresh_stock();
    expected[0] -= 1;
    assert_eq!(stock(&session), expected);
    assert!(output.contains("*** DISPENSING: Coffee (A1) ***"));
    assert!(output.contains("  50p x 1\n"));
}

#[test]
fn declined_change_funds_a_second_purchase() {
    // 200 - 90 (D1) = 110, declined; then E1 costs exactly 110.
    let (session, output) = drive("I\n200\ndone\nS\nd1\nn\nS\ne1\n");

    assert!(session.balance().is_zero());
    assert_eq!(session.inventory().stock_of("D1"), Some(4));
    assert_eq!(session.inventory().stock_of("E1"), Some(3));
    assert_eq!(output.matches("Return change now? (y/n): ").count(), 1);
}

#[test]
fn unknown_code_changes_nothing() {
    let (session, output) = drive("I\n100\ndone\nS\nZZ9\n");
    assert_eq!(session.balance(), Money::from_pence(100));
    assert_eq!(stock(&session), fresh_stock());
    assert!(output.contains("Unknown code. Please try again."));
}

#[test]
fn shortfall_is_reported() {
    let (session, output) = drive("I\n100\ndone\nS\nA1\n");
    assert_eq!(session.balance(), Money::from_pence(100));
    assert_eq!(stock(&session), fresh_stock());
    assert!(output.contains("Insufficient funds. Need 50p more."));
}

#[test]
fn selling_out_blocks_further_purchases() {
    // C1 starts with 4 units at 100p each.
    let script = "I\n200\n200\n100\ndone\nS\nC1\nn\nS\nC1\nn\nS\nC1\nn\nS\nC1\nn\nS\nC1\n";
    let (session, output) = drive(script);

    assert_eq!(session.inventory().stock_of("C1"), Some(0));
    assert_eq!(session.balance(), Money::from_pence(100));
    assert!(output.contains("Sorry, Chocolate Bar is out of stock."));
}

#[test]
fn quit_returns_seventy_five() {
    let (session, output) = drive("I\n50\n20\n5\ndone\nQ\n");

    assert!(session.balance().is_zero());
    let change_at = output.find("*** RETURNING CHANGE: 75p ***").unwrap();
    let goodbye_at = output.find("Goodbye!").unwrap();
    assert!(change_at < goodbye_at);
    assert!(output.contains("  50p x 1\n  20p x 1\n  5p x 1\n"));
    assert!(output.contains("You have a remaining balance."));
}

#[test]
fn quit_stops_reading_input() {
    let (session, _) = drive("q\nI\n200\ndone\n");
    assert!(session.balance().is_zero());
}

#[test]
fn end_of_input_keeps_balance() {
    let (session, output) = drive("I\n100\n");
    assert_eq!(session.balance(), Money::from_pence(100));
    assert!(!output.contains("RETURNING CHANGE"));
    assert!(!output.contains("Goodbye!"));
}

#[test]
fn return_change_command() {
    let (session, output) = drive("R\nI\n20\n20\n10\ndone\nr\n");
    assert!(session.balance().is_zero());
    assert!(output.contains("No change to return."));
    assert!(output.contains("*** RETURNING CHANGE: 50p ***\n  50p x 1\n"));
}

#[test]
fn unknown_and_blank_commands() {
    let (_, output) = drive("x\n\n   \n?\n");
    assert_eq!(output.matches("Unknown option. Please choose I, S, R or Q.").count(), 2);
    // One menu per prompt: four lines read plus the final EOF prompt.
    assert_eq!(output.matches("========== VENDING MACHINE ==========").count(), 5);
}

#[test]
fn non_utf8_lines_are_rejected_not_fatal() {
    let mut script = b"I\n50\ndone\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"I\n");
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(&[0xc3, 0x28, b'\n']);
    script.extend_from_slice(b"done\nQ\n");

    let (session, output) = drive_bytes(script);

    assert!(session.balance().is_zero());
    assert!(output.contains("Unknown option. Please choose I, S, R or Q."));
    assert_eq!(output.matches("  Invalid input. Please enter").count(), 2);
    assert!(output.contains("*** RETURNING CHANGE: 50p ***"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn menu_once_mode() {
    let config = CliConfig {
        menu_mode: MenuMode::Once,
        ..CliConfig::default()
    };
    let (_, output) = drive_with(&config, "I\n10\ndone\nx\n");

    assert_eq!(output.matches("========== VENDING MACHINE ==========").count(), 1);
    assert!(output.contains("Balance: 10p\nChoose [I/S/R/Q]: "));
}
