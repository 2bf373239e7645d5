//! Integration tests for command dispatch.

use satchel_foundation::{Error, ErrorKind, Result};
use satchel_parser::{Action, ActionRegistry, Dispatcher, InputTokenizer};
use satchel_storage::Game;

// =============================================================================
// Tokenizing
// =============================================================================

#[test]
fn tokens_split_on_any_whitespace() {
    let command = InputTokenizer::tokenize("  move\t hallway  ");
    assert_eq!(command.verb(), Some("move"));
    assert_eq!(command.args(), &["hallway"]);
}

#[test]
fn verbs_are_case_sensitive() {
    let dispatcher = Dispatcher::new();
    let mut game = Game::new().unwrap();
    assert_eq!(dispatcher.dispatch(&mut game, "LOOK"), "unknown command");
}

// =============================================================================
// Unknown Input
// =============================================================================

#[test]
fn unknown_verbs_carry_context() {
    let dispatcher = Dispatcher::new();
    let mut game = Game::new().unwrap();

    let err = dispatcher.execute(&mut game, "dance wildly").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownVerb("dance".to_string()));
    let context = err.context.unwrap();
    assert_eq!(context.verb.as_deref(), Some("dance"));
    assert_eq!(context.input.as_deref(), Some("dance wildly"));
}

#[test]
fn empty_line_has_no_verb_in_context() {
    let dispatcher = Dispatcher::new();
    let mut game = Game::new().unwrap();

    let err = dispatcher.execute(&mut game, "").unwrap_err();
    assert_eq!(err.to_string(), "unknown command");
    assert!(err.context.unwrap().verb.is_none());
}

#[test]
fn handler_errors_print_without_context() {
    let dispatcher = Dispatcher::new();
    let mut game = Game::new().unwrap();
    assert_eq!(dispatcher.dispatch(&mut game, "move street"), "no path to street");
}

// =============================================================================
// Custom Registries
// =============================================================================

fn shout(_game: &mut Game, args: &[&str]) -> Result<String> {
    Ok(args[1..].join(" ").to_uppercase())
}

fn fail(_game: &mut Game, _args: &[&str]) -> Result<String> {
    Err(Error::internal("broken"))
}

#[test]
fn custom_actions_dispatch() {
    let mut registry = ActionRegistry::standard();
    registry.register(Action::new("shout", "shout <words>", shout));
    let dispatcher = Dispatcher::with_registry(registry);
    let mut game = Game::new().unwrap();

    assert_eq!(dispatcher.dispatch(&mut game, "shout hello there"), "HELLO THERE");
    assert_eq!(dispatcher.registry().len(), 4);
}

#[test]
fn empty_registry_knows_nothing() {
    let dispatcher = Dispatcher::with_registry(ActionRegistry::new());
    let mut game = Game::new().unwrap();
    assert_eq!(dispatcher.dispatch(&mut game, "look"), "unknown command");
}

#[test]
fn internal_errors_are_not_recoverable() {
    let mut registry = ActionRegistry::new();
    registry.register(Action::new("fail", "fail", fail));
    let dispatcher = Dispatcher::with_registry(registry);
    let mut game = Game::new().unwrap();

    let err = dispatcher.execute(&mut game, "fail").unwrap_err();
    assert!(!err.is_recoverable());
    assert_eq!(err.to_string(), "internal error: broken");
}
