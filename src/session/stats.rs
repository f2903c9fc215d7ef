use serde::{
    Deserialize,
    Serialize,
};

/// Recall-quality signal on a reviewed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewGrade {
    Easy,
    Good,
    Hard,
    Fail,
}

impl ReviewGrade {
    pub fn from_signal(signal: &str) -> Option<Self> {
        match signal {
            "easy" => Some(Self::Easy),
            "good" => Some(Self::Good),
            "hard" => Some(Self::Hard),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }

    /// Queue scores as some hosts report them: 1.5 easy, 1.0 good, 0.5 hard,
    /// 0.0 fail.
    pub fn from_score(score: f64) -> Option<Self> {
        if score == 1.5 {
            Some(Self::Easy)
        } else if score == 1.0 {
            Some(Self::Good)
        } else if score == 0.5 {
            Some(Self::Hard)
        } else if score == 0.0 {
            Some(Self::Fail)
        } else {
            None
        }
    }

    /// A named grade wins over a numeric score. An unrecognized signal is
    /// dropped outright, it does not fall back to the score.
    pub fn resolve(signal: Option<&str>, score: Option<f64>) -> Option<Self> {
        match signal {
            Some(signal) => Self::from_signal(signal),
            None => score.and_then(Self::from_score),
        }
    }
}

/// Raw per-grade counts for the current session. These are the only pending
/// state; point totals are recomputed from them against the current weights,
/// so a weight change mid-session never leaves the two out of step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub cards_created: u32,
    pub reviewed_easy: u32,
    pub reviewed_good: u32,
    pub reviewed_hard: u32,
    pub reviewed_fail: u32,
}

impl SessionStats {
    pub fn record_review(&mut self, grade: ReviewGrade) {
        match grade {
            ReviewGrade::Easy => self.reviewed_easy += 1,
            ReviewGrade::Good => self.reviewed_good += 1,
            ReviewGrade::Hard => self.reviewed_hard += 1,
            ReviewGrade::Fail => self.reviewed_fail += 1,
        }
    }

    pub fn record_creation(&mut self) {
        self.cards_created += 1;
    }

    pub fn total_reviews(&self) -> u32 {
        self.reviewed_easy + self.reviewed_good + self.reviewed_hard + self.reviewed_fail
    }
}

/// Configured point weights. `hp_fail` is the HP delta for a failed review
/// and is non-positive once sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointValues {
    pub xp_easy: f64,
    pub xp_good: f64,
    pub xp_hard: f64,
    pub hp_fail: f64,
    pub xp_per_created: f64,
}

impl Default for PointValues {
    fn default() -> Self {
        Self { xp_easy: 2.0, xp_good: 1.0, xp_hard: 0.5, hp_fail: -0.1, xp_per_created: 5.0 }
    }
}

impl PointValues {
    pub fn xp_for(&self, grade: ReviewGrade) -> f64 {
        match grade {
            ReviewGrade::Easy => self.xp_easy,
            ReviewGrade::Good => self.xp_good,
            ReviewGrade::Hard => self.xp_hard,
            ReviewGrade::Fail => 0.0,
        }
    }

    pub fn hp_for(&self, grade: ReviewGrade) -> f64 {
        match grade {
            ReviewGrade::Fail => self.hp_fail,
            _ => 0.0,
        }
    }

    /// XP weights never negative; the fail weight is accepted with either
    /// sign (settings screens disagree on it) and applied as a loss.
    pub fn sanitized(self) -> Self {
        Self {
            xp_easy: self.xp_easy.max(0.0),
            xp_good: self.xp_good.max(0.0),
            xp_hard: self.xp_hard.max(0.0),
            hp_fail: -self.hp_fail.abs(),
            xp_per_created: self.xp_per_created.max(0.0),
        }
    }
}
