pub mod card;
pub mod list;
pub mod search;
