use rand::Rng;

/// 信頼度の一様サンプリング範囲 [low, high)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    pub low: f64,
    pub high: f64,
}

impl ConfidenceBand {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..self.high)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}
