//! Property-based tests for the engine.
//!
//! Random games are driven by a random action script: each step either
//! toggles the token at some board position or rolls.

use match_dice::core::{EngineConfig, TokenId};
use match_dice::game::{is_won, Catalog, Face, GameEngine, GameState, Token};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Toggle(usize),
    Roll,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..16usize).prop_map(Step::Toggle),
        Just(Step::Roll),
    ]
}

fn catalog_faces() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-F]", 1..4)
}

fn apply(engine: &mut GameEngine, state: &GameState, step: &Step) -> GameState {
    match step {
        Step::Toggle(pos) => {
            let id = state
                .tokens()
                .get(pos % state.len().max(1))
                .map_or(TokenId(u64::MAX), Token::id);
            engine.toggle_hold(state, id)
        }
        Step::Roll => engine.roll(state).unwrap(),
    }
}

fn brute_force_won(state: &GameState) -> bool {
    let tokens: Vec<&Token> = state.tokens().iter().collect();
    !tokens.is_empty()
        && tokens.iter().all(|t| t.is_held())
        && tokens.iter().all(|t| t.face() == tokens[0].face())
}

proptest! {
    #[test]
    fn board_size_never_changes(
        seed in any::<u64>(),
        n in 0..12usize,
        faces in catalog_faces(),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut engine = GameEngine::new(EngineConfig::default().with_token_count(n).with_seed(seed));
        let mut state = engine.new_game(faces).unwrap();
        prop_assert_eq!(state.len(), n);
        for s in &steps {
            state = apply(&mut engine, &state, s);
            prop_assert_eq!(state.len(), n);
        }
    }

    #[test]
    fn won_flag_matches_definition(
        seed in any::<u64>(),
        faces in catalog_faces(),
        steps in prop::collection::vec(step(), 0..60),
    ) {
        let mut engine = GameEngine::new(EngineConfig::default().with_token_count(4).with_seed(seed));
        let mut state = engine.new_game(faces).unwrap();
        for s in &steps {
            state = apply(&mut engine, &state, s);
            prop_assert_eq!(state.is_won(), brute_force_won(&state));
            prop_assert!(state.check_invariants().is_ok());
        }
    }

    #[test]
    fn roll_keeps_held_tokens(
        seed in any::<u64>(),
        faces in catalog_faces(),
        holds in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mut engine = GameEngine::new(EngineConfig::default().with_token_count(6).with_seed(seed));
        let mut state = engine.new_game(faces).unwrap();
        let ids: Vec<TokenId> = state.tokens().iter().map(Token::id).collect();
        for (id, hold) in ids.iter().zip(&holds) {
            if *hold {
                state = engine.toggle_hold(&state, *id);
            }
        }
        prop_assume!(!state.is_won());

        let next = engine.roll(&state).unwrap();
        for (before, after) in state.tokens().iter().zip(next.tokens()) {
            if before.is_held() {
                prop_assert_eq!(after, before);
            } else {
                prop_assert!(!after.is_held());
                prop_assert!(state.catalog().contains(after.face()));
            }
        }
    }

    #[test]
    fn hold_toggle_is_an_involution(
        seed in any::<u64>(),
        faces in catalog_faces(),
        pos in 0..10usize,
    ) {
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        let state = engine.new_game(faces).unwrap();
        let id = state.tokens()[pos].id();
        let twice = engine.toggle_hold(&engine.toggle_hold(&state, id), id);
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn is_won_requires_one_face(faces in prop::collection::vec("[AB]", 1..8)) {
        let catalog = Catalog::new(["A", "B"]).unwrap();
        let tokens: Vec<Token> = faces
            .iter()
            .enumerate()
            .map(|(i, f)| Token::new(TokenId(i as u64), Face::new(f.as_str())).with_held(true))
            .collect();
        let all_same = faces.iter().all(|f| f == &faces[0]);
        prop_assert_eq!(is_won(&tokens), all_same);
        prop_assert_eq!(GameState::new(catalog, tokens).is_won(), all_same);
    }
}
