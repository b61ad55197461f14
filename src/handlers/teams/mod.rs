pub mod team_handler;
