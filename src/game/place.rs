use rand::RngCore;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::QuizConfig;
use crate::model::{GeoPoint, MapPoint, Place};
use crate::projection::{CoordinateProjector, haversine_km};

/// Score for a guess `distance_km` away: linear from `max_score` at zero
/// distance down to nothing at `zero_score_km`.
pub fn score_for_distance(distance_km: f64, max_score: u32, zero_score_km: f64) -> u32 {
    if zero_score_km <= 0.0 {
        return if distance_km <= 0.0 { max_score } else { 0 };
    }
    let fraction = (1.0 - distance_km / zero_score_km).clamp(0.0, 1.0);
    (f64::from(max_score) * fraction).round() as u32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub place: String,
    pub guess: GeoPoint,
    pub answer: GeoPoint,
    pub distance_km: f64,
    pub score: u32,
}

impl RoundResult {
    /// Where to draw the true location.
    pub fn answer_pin(&self, projector: &CoordinateProjector) -> MapPoint {
        projector.to_point(self.answer)
    }
}

/// Guess where a pictured place is by clicking the map.
///
/// Places are geographic; clicks are converted with the projector and scored
/// by great-circle distance. A click on the pin itself scores the maximum.
#[derive(Debug, Clone)]
pub struct FindThePlaceGame {
    rounds: Vec<Place>,
    results: Vec<RoundResult>,
    max_round_score: u32,
    zero_score_distance_km: f64,
    pin_hit_radius: f64,
}

impl FindThePlaceGame {
    /// Shuffle `places` and keep `rounds_per_game` of them. `None` without places.
    pub fn new(places: &[Place], config: &QuizConfig, rng: &mut dyn RngCore) -> Option<Self> {
        if places.is_empty() || config.rounds_per_game == 0 {
            return None;
        }
        let mut rounds = places.to_vec();
        rounds.shuffle(rng);
        rounds.truncate(config.rounds_per_game);
        Some(Self {
            rounds,
            results: Vec::new(),
            max_round_score: config.max_round_score,
            zero_score_distance_km: config.zero_score_distance_km,
            pin_hit_radius: config.pin_hit_radius,
        })
    }

    pub fn current_place(&self) -> Option<&Place> {
        self.rounds.get(self.results.len())
    }

    /// Score a click on the map raster and advance. `None` once finished.
    pub fn guess(
        &mut self,
        click: MapPoint,
        projector: &CoordinateProjector,
    ) -> Option<&RoundResult> {
        let (name, answer) = {
            let place = self.current_place()?;
            (place.name.clone(), place.location)
        };
        let click = projector.clamp_point(click);
        let guess = projector.to_coordinates(click);
        let distance_km = haversine_km(guess, answer);

        let pin = projector.to_point(answer);
        let on_pin = projector.hit_pin(click, pin, self.pin_hit_radius);
        let score = if on_pin {
            self.max_round_score
        } else {
            score_for_distance(distance_km, self.max_round_score, self.zero_score_distance_km)
        };
        tracing::debug!("{name}: {distance_km:.1} km off, {score} points");

        self.results.push(RoundResult {
            place: name,
            guess,
            answer,
            distance_km,
            score,
        });
        self.results.last()
    }

    /// 1-based number of the round being played (or last played).
    pub fn round_number(&self) -> usize {
        (self.results.len() + 1).min(self.rounds.len())
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_finished(&self) -> bool {
        self.results.len() >= self.rounds.len()
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn total_score(&self) -> u32 {
        self.results
            .iter()
            .fold(0u32, |total, r| total.saturating_add(r.score))
    }

    pub fn max_total_score(&self) -> u32 {
        let rounds = u32::try_from(self.rounds.len()).unwrap_or(u32::MAX);
        self.max_round_score.saturating_mul(rounds)
    }

    /// Replay the same places from round one.
    pub fn restart(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_falls_off_linearly() {
        assert_eq!(score_for_distance(0.0, 5000, 5000.0), 5000);
        assert_eq!(score_for_distance(2500.0, 5000, 5000.0), 2500);
        assert_eq!(score_for_distance(5000.0, 5000, 5000.0), 0);
        assert_eq!(score_for_distance(12000.0, 5000, 5000.0), 0);
    }

    #[test]
    fn zero_falloff_distance_only_rewards_exact() {
        assert_eq!(score_for_distance(0.0, 100, 0.0), 100);
        assert_eq!(score_for_distance(0.1, 100, 0.0), 0);
    }
}
