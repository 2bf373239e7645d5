//! Integration tests for the standard handlers.

use satchel_parser::Dispatcher;
use satchel_storage::Game;

fn run(game: &mut Game, line: &str) -> String {
    Dispatcher::new().dispatch(game, line)
}

// =============================================================================
// look
// =============================================================================

#[test]
fn look_in_kitchen() {
    let mut game = Game::new().unwrap();
    assert_eq!(
        run(&mut game, "look"),
        "you are in the kitchen, you need to pack your backpack and go to university. you can go to - hallway"
    );
}

#[test]
fn look_with_argument_is_invalid() {
    let mut game = Game::new().unwrap();
    assert_eq!(run(&mut game, "look around"), "invalid command, expected: look");
}

// =============================================================================
// move
// =============================================================================

#[test]
fn move_prints_arrival_text() {
    let mut game = Game::new().unwrap();
    assert_eq!(
        run(&mut game, "move hallway"),
        "nothing interesting. you can go to - kitchen, room, street"
    );
    assert_eq!(
        run(&mut game, "move street"),
        "it is spring outside. you can go to - home"
    );
    assert_eq!(
        run(&mut game, "move hallway"),
        "nothing interesting. you can go to - kitchen, room, street"
    );
    assert_eq!(
        run(&mut game, "move kitchen"),
        "kitchen, nothing interesting. you can go to - hallway"
    );
}

#[test]
fn move_arity() {
    let mut game = Game::new().unwrap();
    assert_eq!(run(&mut game, "move"), "invalid command, expected: move <place>");
    assert_eq!(
        run(&mut game, "move to hallway"),
        "invalid command, expected: move <place>"
    );
    assert_eq!(game.current_location().unwrap().name(), "kitchen");
}

#[test]
fn move_to_current_location_fails() {
    let mut game = Game::new().unwrap();
    assert_eq!(run(&mut game, "move kitchen"), "no path to kitchen");
}

#[test]
fn move_to_unknown_place_fails() {
    let mut game = Game::new().unwrap();
    assert_eq!(run(&mut game, "move nowhere"), "no path to nowhere");
}

// =============================================================================
// take
// =============================================================================

#[test]
fn take_reports_item() {
    let mut game = Game::new().unwrap();
    run(&mut game, "move hallway");
    run(&mut game, "move room");
    assert_eq!(run(&mut game, "take notes"), "item added to inventory: notes");
}

#[test]
fn take_arity() {
    let mut game = Game::new().unwrap();
    assert_eq!(run(&mut game, "take"), "invalid command, expected: take <item>");
}

#[test]
fn take_elsewhere_fails() {
    let mut game = Game::new().unwrap();
    assert_eq!(run(&mut game, "take keys"), "no such item");
    assert!(game.player().inventory().is_empty());
}
