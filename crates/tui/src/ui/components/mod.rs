pub mod amount;
pub mod card;
pub mod hints;
