//! Property tests for drawing and judging.

use proptest::prelude::*;

use simon_says::catalog::Catalog;
use simon_says::core::{Action, GameConfig, GameRng};
use simon_says::rules::{Command, Prefix, RoundEngine, SimonRules};

fn rules_for(actions: &[String]) -> (SimonRules, Catalog) {
    let catalog = Catalog::from_lines(actions).unwrap();
    let rules = SimonRules::new(GameConfig::default(), catalog.clone(), "Ada").unwrap();
    (rules, catalog)
}

fn action_text() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,3}"
}

proptest! {
    #[test]
    fn prop_drawn_action_is_in_catalog(
        actions in prop::collection::vec(action_text(), 1..12),
        seed in any::<u64>(),
    ) {
        let (rules, catalog) = rules_for(&actions);
        let mut rng = GameRng::new(seed);
        for _ in 0..20 {
            let cmd = rules.draw_command(&mut rng);
            prop_assert!(catalog.contains(cmd.action()));
        }
    }

    #[test]
    fn prop_authorized_judging_ignores_case(text in action_text(), flips in prop::collection::vec(any::<bool>(), 40)) {
        let (rules, _) = rules_for(&[text.clone()]);
        let action = Action::new(&text).unwrap();
        let cmd = Command::new(Prefix::Authorized, action, "Simon Says");

        let shouted: String = text
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();

        let outcome = rules.judge(&cmd, &shouted);
        prop_assert!(!outcome.is_strike);
        prop_assert_eq!(outcome.score_delta, 1);
    }

    #[test]
    fn prop_unauthorized_any_response_is_strike(
        text in action_text(),
        response in "\\S.{0,20}",
        named in any::<bool>(),
    ) {
        let (rules, _) = rules_for(&[text.clone()]);
        let prefix = if named { Prefix::DecoyNamed("Simone".into()) } else { Prefix::Unprefixed };
        let cmd = Command::new(prefix, Action::new(&text).unwrap(), "Simon Says");

        let outcome = rules.judge(&cmd, response.trim());
        prop_assert!(outcome.is_strike);
        prop_assert_eq!(outcome.score_delta, 0);
    }

    #[test]
    fn prop_same_seed_same_commands(seed in any::<u64>()) {
        let actions: Vec<String> = ["wave", "nod", "jump"].iter().map(|s| s.to_string()).collect();
        let (rules, _) = rules_for(&actions);

        let mut a = GameRng::new(seed);
        let mut b = GameRng::new(seed);
        for _ in 0..10 {
            prop_assert_eq!(rules.draw_command(&mut a), rules.draw_command(&mut b));
        }
    }
}
