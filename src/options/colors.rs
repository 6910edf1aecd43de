use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::playback::BarRole;

/// Bar palette, one RGB triple (0.0-1.0) per [`BarRole`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colors", inline)]
#[serde(default)]
pub struct ColorOptions {
    /// Bars not involved in the current step.
    pub idle: [f32; 3],
    /// Bars being compared.
    pub comparing: [f32; 3],
    /// Bars being swapped.
    pub swapping: [f32; 3],
    /// Pivot, minimum, merge range and other annotated bars.
    pub highlighted: [f32; 3],
    /// Bars in their final position.
    pub sorted: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            idle: [0.204, 0.596, 0.859],
            comparing: [0.953, 0.612, 0.071],
            swapping: [0.906, 0.298, 0.235],
            highlighted: [0.608, 0.349, 0.714],
            sorted: [0.153, 0.682, 0.376],
        }
    }
}

impl ColorOptions {
    /// Colour for a bar with `role`.
    #[must_use]
    pub fn for_role(&self, role: BarRole) -> [f32; 3] {
        match role {
            BarRole::Idle => self.idle,
            BarRole::Comparing => self.comparing,
            BarRole::Swapping => self.swapping,
            BarRole::Highlighted => self.highlighted,
            BarRole::Sorted => self.sorted,
        }
    }

    /// Colour for `role` as 8-bit RGB.
    #[must_use]
    pub fn rgb8(&self, role: BarRole) -> [u8; 3] {
        self.for_role(role)
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Legend entries in display order.
    #[must_use]
    pub fn legend(&self) -> [(&'static str, [f32; 3]); 5] {
        [
            ("Unsorted", self.idle),
            ("Comparing", self.comparing),
            ("Swapping", self.swapping),
            ("Highlighted", self.highlighted),
            ("Sorted", self.sorted),
        ]
    }
}
