pub mod assembly_deck;
pub mod header;
pub mod introduction;
pub mod node_card;
pub mod parts_bin;
pub mod physics_board;
pub mod sidebar;
