pub mod dto;
pub mod yoy;

pub use dto::*;
pub use yoy::{compute_yoy, percent_change};
