pub mod match_handler;
pub mod match_player_handler;
