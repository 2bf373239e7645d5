//! Full play-throughs.

use satchel::foundation::Result;
use satchel::runtime::{LineEditor, ReadResult, Repl, ReplConfig, Reply};
use satchel::storage::Game;

fn play(game: &mut Game, line: &str) -> String {
    satchel::parser::Dispatcher::new().dispatch(game, line)
}

#[test]
fn pack_the_bag() {
    let mut game = Game::new().unwrap();

    assert!(play(&mut game, "look").contains("hallway"));
    play(&mut game, "move hallway");
    assert_eq!(
        play(&mut game, "move room"),
        "you are in your room. you can go to - hallway"
    );
    assert_eq!(
        play(&mut game, "look"),
        "on the table: keys, notes, backpack. you can go to - hallway"
    );

    assert!(play(&mut game, "take keys").contains("keys"));
    assert_eq!(
        play(&mut game, "look"),
        "on the table: notes, backpack. you can go to - hallway"
    );

    play(&mut game, "take notes");
    play(&mut game, "take backpack");
    assert_eq!(play(&mut game, "look"), "empty room. you can go to - hallway");

    assert_eq!(play(&mut game, "move kitchen"), "no path to kitchen");
    assert_eq!(
        game.player().inventory_names(game.world()).unwrap(),
        vec!["keys", "notes", "backpack"]
    );
}

#[test]
fn failures_leave_state_alone() {
    let mut game = Game::new().unwrap();
    for line in ["", "dance", "move nowhere", "take keys", "look twice"] {
        play(&mut game, line);
    }
    assert_eq!(game.current_location().unwrap().name(), "kitchen");
    assert!(game.player().inventory().is_empty());
}

#[test]
fn reset_starts_over() {
    let mut game = Game::new().unwrap();
    play(&mut game, "move hallway");
    play(&mut game, "move room");
    play(&mut game, "take keys");

    game.reset().unwrap();

    assert_eq!(game.current_location().unwrap().name(), "kitchen");
    assert!(game.player().inventory().is_empty());
    play(&mut game, "move hallway");
    play(&mut game, "move room");
    assert!(play(&mut game, "look").contains("keys, notes, backpack"));
}

// =============================================================================
// Through the REPL
// =============================================================================

struct NullEditor;

impl LineEditor for NullEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl() -> Repl<NullEditor> {
    Repl::with_editor(NullEditor, ReplConfig::default()).unwrap()
}

#[test]
fn repl_marks_every_response() {
    let mut repl = repl();
    let Reply::Text(text) = repl.eval("move nowhere") else {
        panic!("expected text");
    };
    assert_eq!(repl.format_response(&text), "> no path to nowhere");

    let Reply::Text(text) = repl.eval("") else {
        panic!("expected text");
    };
    assert_eq!(repl.format_response(&text), "> unknown command");
}

#[test]
fn repl_quits_on_quit() {
    let mut repl = repl();
    assert_eq!(repl.eval("quit"), Reply::Quit);
}

#[test]
fn repl_ends_on_eof() {
    let mut repl = Repl::with_editor(NullEditor, ReplConfig::default().with_banner(false)).unwrap();
    repl.run().unwrap();
    assert_eq!(repl.game().current_location().unwrap().name(), "kitchen");
}
