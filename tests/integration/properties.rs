//! Property tests over arbitrary command sequences.

use proptest::prelude::*;
use satchel::parser::Dispatcher;
use satchel::storage::Game;

fn command() -> impl Strategy<Value = String> {
    let verb = prop::sample::select(vec!["look", "move", "take", "jump", ""]);
    let arg = prop::sample::select(vec![
        "", "kitchen", "room", "hallway", "street", "keys", "notes", "backpack", "home",
    ]);
    (verb, arg).prop_map(|(v, a)| format!("{v} {a}"))
}

proptest! {
    #[test]
    fn player_only_stands_next_to_where_they_were(lines in prop::collection::vec(command(), 0..40)) {
        let dispatcher = Dispatcher::new();
        let mut game = Game::new().unwrap();

        for line in &lines {
            let before = game.player().location();
            dispatcher.dispatch(&mut game, line);
            let after = game.player().location();
            prop_assert!(before == after || game.world().are_adjacent(before, after));
        }
    }

    #[test]
    fn inventory_never_repeats(lines in prop::collection::vec(command(), 0..40)) {
        let dispatcher = Dispatcher::new();
        let mut game = Game::new().unwrap();

        for line in &lines {
            dispatcher.dispatch(&mut game, line);
        }

        let mut inventory = game.player().inventory().to_vec();
        let len = inventory.len();
        inventory.sort_unstable();
        inventory.dedup();
        prop_assert_eq!(inventory.len(), len);
        prop_assert!(len <= 3);
    }
}
