pub mod clean_sheets;
pub mod scorers;
pub mod standings;
