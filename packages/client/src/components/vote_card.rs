use shared::models::name::Name;
use tokio::sync::mpsc::UnboundedSender;

use crate::store::Store;

/// What a [`VoteCard`] asks its parent to do.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteEvent {
    Like(Name),
    Dislike(Name),
}

/// Shows one candidate with like/dislike buttons.
///
/// Purely presentational: it never talks to the API. Votes are sent to the
/// parent through `events`, and the parent decides what happens next.
pub struct VoteCard {
    name: Option<Name>,
    loading: Store<bool>,
    events: UnboundedSender<VoteEvent>,
}

impl VoteCard {
    pub fn new(events: UnboundedSender<VoteEvent>) -> Self {
        Self {
            name: None,
            loading: Store::new(false),
            events,
        }
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, name: Option<Name>) {
        self.name = name;
    }

    pub fn loading(&self) -> &Store<bool> {
        &self.loading
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.publish(loading);
    }

    /// Returns whether an event was emitted.
    pub fn like(&self) -> bool {
        self.emit(VoteEvent::Like)
    }

    /// Returns whether an event was emitted.
    pub fn dislike(&self) -> bool {
        self.emit(VoteEvent::Dislike)
    }

    fn emit(&self, event: fn(Name) -> VoteEvent) -> bool {
        match &self.name {
            Some(name) => self.events.send(event(name.clone())).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::name::Gender;
    use tokio::sync::mpsc;

    #[test]
    fn test_like_and_dislike_carry_the_name() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut card = VoteCard::new(tx);
        let name = Name::new("Alice", Gender::F);
        card.set_name(Some(name.clone()));

        assert!(card.like());
        assert!(card.dislike());

        assert_eq!(rx.try_recv().unwrap(), VoteEvent::Like(name.clone()));
        assert_eq!(rx.try_recv().unwrap(), VoteEvent::Dislike(name));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_no_event_without_a_name() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let card = VoteCard::new(tx);

        assert!(!card.like());
        assert!(!card.dislike());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_loading_input_is_echoed() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let card = VoteCard::new(tx);
        assert!(!card.loading().get());

        card.set_loading(true);

        assert!(card.loading().get());
    }

    #[test]
    fn test_emit_after_parent_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut card = VoteCard::new(tx);
        card.set_name(Some(Name::new("Paul", Gender::M)));
        drop(rx);

        assert!(!card.like());
    }
}
