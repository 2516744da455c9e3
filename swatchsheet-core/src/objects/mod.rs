//! The handful of PDF object types a swatch sheet serializes to.

mod dictionary;
mod primitive;
mod stream;

pub use dictionary::Dictionary;
pub use primitive::{Object, ObjectId};
pub use stream::Stream;
