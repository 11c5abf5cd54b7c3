pub mod dictionary;
pub mod matcher;
pub mod normalize;

pub use dictionary::Dictionaries;
