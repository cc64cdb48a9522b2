//! The fact deck: a fixed, ordered collection of fact strings.

use std::fmt;

/// Sentinel shown when a deck has nothing to offer.
pub const NO_FACTS: &str = "No fun facts available.";

/// A single fact. Facts carry no identity beyond their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact(String);

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Fact(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fact {
    fn from(s: &str) -> Self {
        Fact(s.to_string())
    }
}

/// An immutable, ordered deck of facts.
///
/// Built once at startup and handed to the view state; never mutated
/// afterwards. Order is irrelevant to selection.
#[derive(Debug, Clone)]
pub struct FactDeck {
    facts: Vec<Fact>,
}

impl FactDeck {
    pub fn new(facts: Vec<Fact>) -> Self {
        FactDeck { facts }
    }

    /// The eight built-in facts.
    pub fn builtin() -> Self {
        FactDeck::new(BUILTIN_FACTS.iter().map(|&s| Fact::from(s)).collect())
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }
}

const BUILTIN_FACTS: [&str; 8] = [
    "Honey never spoils. Archaeologists have found pots of honey in Georgian tombs that are over 5,000 years old and still edible.",
    "Bananas are berries, but strawberries aren't.",
    "A day on Venus is longer than a year on Venus.",
    "There are more possible iterations of a game of chess than there are atoms in the known universe.",
    "Octopuses have three hearts and blue blood.",
    "The Eiffel Tower can be 15 cm taller during the summer when the temperature increases.",
    "Oldest wine in the world is found in Georgia and is 8,000 years old.",
    "A single strand of spaghetti is called a 'spaghetto'.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_eight_facts() {
        let deck = FactDeck::builtin();
        assert_eq!(deck.len(), 8);
        assert!(!deck.is_empty());
    }

    #[test]
    fn facts_compare_by_value() {
        assert_eq!(Fact::from("a"), Fact::new("a"));
        assert_ne!(Fact::from("a"), Fact::from("b"));
    }

    #[test]
    fn contains_checks_membership() {
        let deck = FactDeck::builtin();
        let first = deck.get(0).unwrap().clone();
        assert!(deck.contains(&first));
        assert!(!deck.contains(&Fact::from("water is wet")));
    }

    #[test]
    fn custom_decks_are_supported() {
        let deck = FactDeck::new(vec![Fact::from("one"), Fact::from("two")]);
        assert_eq!(deck.len(), 2);
        assert!(deck.contains(&Fact::from("two")));
    }
}
