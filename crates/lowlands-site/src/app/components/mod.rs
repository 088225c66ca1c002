pub mod bento_card;
pub mod detail_section;
pub mod footer;
pub mod hero;

pub use bento_card::BentoCard;
pub use detail_section::DetailSection;
pub use footer::Footer;
pub use hero::Hero;
