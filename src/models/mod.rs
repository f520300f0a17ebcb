//! World of Warcraft API model types.

mod character;
mod guild;
mod realm;

pub use character::*;
pub use guild::*;
pub use realm::*;
