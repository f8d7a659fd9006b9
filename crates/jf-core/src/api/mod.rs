pub mod batch_match;
pub mod match_response;

pub use batch_match::{BatchMatchItem, BatchMatchResponse};
pub use match_response::MatchResponse;
