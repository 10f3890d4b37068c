pub mod club_card;
pub mod club_grid;
