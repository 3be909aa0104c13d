pub mod c_source;
pub mod json;

pub use c_source::CSourceWriter;
pub use json::ScoreJson;
