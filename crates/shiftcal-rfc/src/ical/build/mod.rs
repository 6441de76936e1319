//! Writing calendars as RFC 5545 text: TEXT escaping, 75-octet line folding
//! and serialization with a fixed property order.

mod escape;
mod fold;
mod serializer;

pub use serializer::serialize;
