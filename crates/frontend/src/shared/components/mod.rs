pub mod card_animated;
pub mod filter_chip;
