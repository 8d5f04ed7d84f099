//! Rendering module: serializer boundary and previews.

mod json;
mod serializer;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use serializer::{DocumentSerializer, JsonSerializer, SerializerRegistry};
pub use text::to_text;
