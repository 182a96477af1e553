//! Display conversions for world distances.

/// World units per astronomical unit.
pub const UNITS_PER_AU: f32 = 400.0;

/// Format a world-space distance as astronomical units, e.g. `"1.25au"`.
pub fn format_au(distance: f32) -> String {
    format!("{:.2}au", distance / UNITS_PER_AU)
}
