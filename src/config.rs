use serde::Deserialize;

/// Tunables for loading and the three game modes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// RNG seed for fallback synthesis, pair selection, and place order.
    pub seed: u64,
    /// Chance that two countries sharing a classification get linked when
    /// adjacency data is missing (0.0–1.0).
    pub fallback_link_probability: f64,
    /// Width of the pre-rendered map raster in pixels.
    pub map_width: f64,
    /// Height of the pre-rendered map raster in pixels.
    pub map_height: f64,
    /// Places per Find the Place game.
    pub rounds_per_game: usize,
    /// Score for a perfect Find the Place guess.
    pub max_round_score: u32,
    /// Guess distance at which a round scores zero.
    pub zero_score_distance_km: f64,
    /// Click tolerance around a pin, in raster pixels.
    pub pin_hit_radius: f64,
    /// Start countries tried before random pair generation gives up.
    pub pair_attempts: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fallback_link_probability: 0.3,
            map_width: 2000.0,
            map_height: 1000.0,
            rounds_per_game: 5,
            max_round_score: 5000,
            zero_score_distance_km: 5000.0,
            pin_hit_radius: 12.0,
            pair_attempts: 64,
        }
    }
}

impl QuizConfig {
    /// Whether the map raster has a finite, positive size.
    pub fn has_valid_raster(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        positive(self.map_width) && positive(self.map_height)
    }
}
