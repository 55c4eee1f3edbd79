pub mod inspect;
pub mod normalize;
