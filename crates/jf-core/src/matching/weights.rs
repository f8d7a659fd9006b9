/// Default factor weights: skill-dominated, experience and location on
/// equal footing, title as a tiebreaker.
pub const BALANCED_WEIGHTS: MatchWeights = MatchWeights {
    skill: 0.5,
    experience: 0.2,
    location: 0.2,
    title: 0.1,
};

/// Alternate preset that favors title alignment over location, for
/// deployments where most postings are remote-friendly.
pub const TITLE_FORWARD_WEIGHTS: MatchWeights = MatchWeights {
    skill: 0.5,
    experience: 0.2,
    location: 0.1,
    title: 0.2,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skill: f64,
    pub experience: f64,
    pub location: f64,
    pub title: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.experience + self.location + self.title
    }
}
