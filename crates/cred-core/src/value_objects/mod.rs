//! Value objects - immutable types that represent domain concepts

mod encoded_secret;

pub use encoded_secret::{EncodedSecret, SECRET_SEPARATOR};
