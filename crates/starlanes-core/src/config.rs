//! Engine tuning constants.

use serde::{Deserialize, Serialize};

/// Tunable constants for one game session.
///
/// Defaults reproduce the original balance sheet; tests and scenario
/// harnesses override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Credits the player starts with.
    pub starting_credits: u64,
    /// Iron consumed by `build_ship`.
    pub ship_iron_cost: f32,
    /// Hop range of newly built ships.
    pub ship_range: f32,
    /// Transit speed of cargo ships, world units per second.
    pub cargo_speed: f32,
    /// Credits consumed by `build_factory`.
    pub factory_credit_cost: u64,
    /// Iron consumed by `build_station`.
    pub station_iron_cost: f32,
    /// Seconds from funding a station to it appearing.
    pub station_build_seconds: f32,
    /// Radius of completed stations.
    pub station_radius: f32,
    /// Efficiency loss copied onto bodies at creation.
    pub efficiency_loss: f32,
    /// Drift speed when a body is given a course.
    pub body_drift_speed: f32,
    /// The board stops posting at this many active missions.
    pub max_active_missions: usize,
    /// Seconds until the first posting attempt of a session.
    pub first_mission_delay: f32,
    /// Arrival slop for drifting bodies, world units.
    pub arrival_epsilon: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_credits: 0,
            ship_iron_cost: 300.0,
            ship_range: 500.0,
            cargo_speed: 100.0,
            factory_credit_cost: 1000,
            station_iron_cost: 10_000.0,
            station_build_seconds: 2.0,
            station_radius: 20.0,
            efficiency_loss: 0.0237,
            body_drift_speed: 10.0,
            max_active_missions: 3,
            first_mission_delay: 1.0,
            arrival_epsilon: 1.0,
        }
    }
}

/// A single invalid tuning value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Ships must be able to fly somewhere.
    NonPositiveShipRange(f32),
    /// Cargo ships must move.
    NonPositiveCargoSpeed(f32),
    /// Efficiency loss outside [0, 1) would mint or annihilate stock.
    EfficiencyLossOutOfRange(f32),
    /// The mission board needs room for at least one mission.
    ZeroMissionCap,
    /// Stations must take some time to build.
    NonPositiveStationTime(f32),
}

impl GameConfig {
    /// Validate the tuning values, returning all problems found.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.ship_range <= 0.0 {
            errors.push(ConfigError::NonPositiveShipRange(self.ship_range));
        }
        if self.cargo_speed <= 0.0 {
            errors.push(ConfigError::NonPositiveCargoSpeed(self.cargo_speed));
        }
        if !(0.0..1.0).contains(&self.efficiency_loss) {
            errors.push(ConfigError::EfficiencyLossOutOfRange(self.efficiency_loss));
        }
        if self.max_active_missions == 0 {
            errors.push(ConfigError::ZeroMissionCap);
        }
        if self.station_build_seconds <= 0.0 {
            errors.push(ConfigError::NonPositiveStationTime(
                self.station_build_seconds,
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_each_problem() {
        let config = GameConfig {
            ship_range: 0.0,
            cargo_speed: -1.0,
            efficiency_loss: 1.5,
            max_active_missions: 0,
            station_build_seconds: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate().len(), 5);
    }
}
