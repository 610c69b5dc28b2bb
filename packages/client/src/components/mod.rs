pub mod vote_card;
