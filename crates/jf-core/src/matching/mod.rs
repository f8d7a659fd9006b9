pub mod experience;
pub mod location;
pub mod scoring;
pub mod skills;
pub mod title;
pub mod weights;

/// Score used whenever one side of a comparison carries no data.
/// Absent requirements can neither reward nor penalize.
pub const NEUTRAL_SCORE: f64 = 50.0;
