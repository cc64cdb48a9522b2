//! Uniform fact selection with an optional exclusion.

use rand::Rng;

use crate::facts::{Fact, FactDeck, NO_FACTS};

/// Pick a random fact, avoiding `exclude` when possible.
///
/// The candidate subset is every fact not equal to `exclude`. When that
/// subset is empty the excluded fact itself comes back unchanged; an
/// empty deck with nothing to exclude yields the sentinel fact.
pub fn pick_fact<R: Rng>(deck: &FactDeck, exclude: Option<&Fact>, rng: &mut R) -> Fact {
    let candidates: Vec<&Fact> = deck
        .iter()
        .filter(|f| exclude.map_or(true, |e| *f != e))
        .collect();

    if candidates.is_empty() {
        return match exclude {
            Some(fact) => fact.clone(),
            None => Fact::new(NO_FACTS),
        };
    }

    candidates[rng.gen_range(0..candidates.len())].clone()
}

/// Pick with the thread-local RNG.
pub fn pick(deck: &FactDeck, exclude: Option<&Fact>) -> Fact {
    pick_fact(deck, exclude, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    fn make_deck(texts: &[&str]) -> FactDeck {
        FactDeck::new(texts.iter().map(|&s| Fact::from(s)).collect())
    }

    #[test]
    fn picks_a_member_of_the_deck() {
        let deck = FactDeck::builtin();
        for _ in 0..100 {
            let fact = pick(&deck, None);
            assert!(deck.contains(&fact));
        }
    }

    #[test]
    fn never_repeats_the_excluded_fact() {
        let deck = FactDeck::builtin();
        let current = deck.get(0).unwrap().clone();
        for _ in 0..100 {
            let fact = pick(&deck, Some(&current));
            assert!(deck.contains(&fact));
            assert_ne!(fact, current);
        }
    }

    #[test]
    fn single_fact_deck_falls_back_to_the_excluded_fact() {
        let deck = make_deck(&["X"]);
        let only = Fact::from("X");
        assert_eq!(pick(&deck, Some(&only)), only);
    }

    #[test]
    fn empty_deck_yields_the_sentinel() {
        let deck = make_deck(&[]);
        assert_eq!(pick(&deck, None), Fact::from(NO_FACTS));
    }

    #[test]
    fn exclusion_of_a_non_member_keeps_all_candidates() {
        let deck = make_deck(&["a", "b"]);
        let outsider = Fact::from("c");
        for _ in 0..20 {
            assert!(deck.contains(&pick(&deck, Some(&outsider))));
        }
    }

    #[test]
    fn identical_rngs_pick_identically() {
        let deck = FactDeck::builtin();
        let mut a = StepRng::new(0, 1);
        let mut b = StepRng::new(0, 1);
        assert_eq!(
            pick_fact(&deck, None, &mut a),
            pick_fact(&deck, None, &mut b)
        );
    }
}
