//! Request-scoped card number pseudonyms.
//!
//! A [`Pseudonymizer`] lives for exactly one query response. The first time a
//! card number is seen it gets a fresh random v4 UUID; later occurrences in
//! the same response reuse it. Nothing is persisted, so two responses never
//! share pseudonyms.

use std::collections::HashMap;

use uuid::Uuid;

use crate::swipe::{AnonymizedSwipe, SwipeRecord};

#[derive(Debug, Default)]
pub struct Pseudonymizer {
  pseudonyms: HashMap<String, Uuid>,
}

impl Pseudonymizer {
  pub fn new() -> Self { Self::default() }

  /// The pseudonym for `card_number`, generating one on first sight.
  pub fn pseudonym_for(&mut self, card_number: &str) -> Uuid {
    if let Some(id) = self.pseudonyms.get(card_number) {
      return *id;
    }
    let id = Uuid::new_v4();
    self.pseudonyms.insert(card_number.to_owned(), id);
    id
  }

  pub fn anonymize(&mut self, record: SwipeRecord) -> AnonymizedSwipe {
    AnonymizedSwipe {
      pseudonym: self.pseudonym_for(&record.card_number),
      timestamp: record.timestamp,
    }
  }

  /// Anonymize `records` in order.
  pub fn anonymize_all(
    &mut self,
    records: impl IntoIterator<Item = SwipeRecord>,
  ) -> Vec<AnonymizedSwipe> {
    records.into_iter().map(|r| self.anonymize(r)).collect()
  }

  /// Number of distinct card numbers seen so far.
  pub fn distinct_cards(&self) -> usize { self.pseudonyms.len() }
}
