// src/engine/config.rs

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Apply recency, specialization and urgency-weighting adjustments.
    /// A request may override this per call.
    pub ai_enhanced: bool,
    pub recency_window_days: i64,
    pub loyalty_window_days: i64,
    /// Shortage count above which shortages are scored on the rayon pool.
    pub parallel_threshold: usize,
    /// Keep at most this many recommendations per shortage.
    pub max_per_shortage: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ai_enhanced: true,
            recency_window_days: 30,
            loyalty_window_days: 60,
            parallel_threshold: 8,
            max_per_shortage: None,
        }
    }
}

impl EngineConfig {
    pub fn with_ai_enhanced(mut self, enabled: bool) -> Self {
        self.ai_enhanced = enabled;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_max_per_shortage(mut self, max: usize) -> Self {
        self.max_per_shortage = Some(max);
        self
    }
}
