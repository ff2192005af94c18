use glam::Vec3;

use crate::color::ColorRgb;
use crate::error::SceneError;
use crate::math::Range;
use crate::pivot::INITIAL_SCALE;

pub const DEFAULT_PLOT_RANGE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AxesConfig {
    pub length: f32,
    pub arrowheads: bool,
    pub arrow_radius: f32,
    pub arrow_height: f32,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PLOT_RANGE,
            arrowheads: true,
            arrow_radius: 0.2,
            arrow_height: 0.6,
        }
    }
}

/// Per-tick rates and toggles of the pivot animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub rotate_data: bool,
    pub rotate_model: bool,
    pub oscillate_scale: bool,
    /// Radians added to the data pivot every tick.
    pub data_rotation_speed: f32,
    /// Radians added to the model pivot every tick.
    pub model_rotation_speed: f32,
    /// Initial signed scale step; the sign flips at each bound.
    pub scale_speed: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotate_data: true,
            rotate_model: true,
            oscillate_scale: true,
            data_rotation_speed: 0.02,
            model_rotation_speed: 0.01,
            scale_speed: 0.005,
            scale_min: 0.5,
            scale_max: 2.25,
        }
    }
}

impl AnimationConfig {
    /// Scale bounds must enclose the starting scale, otherwise the oscillation
    /// flips direction every tick and never moves.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.scale_min <= INITIAL_SCALE && INITIAL_SCALE <= self.scale_max) {
            return Err(SceneError::InvalidScaleBounds {
                min: self.scale_min,
                max: self.scale_max,
            });
        }

        Ok(())
    }
}

/// Startup constants of a plot. Nothing here changes once the scene is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub range_min: f32,
    pub range_max: f32,
    /// Number of random points. Signed so that bad input can be reported instead of wrapped.
    pub point_count: i64,
    pub point_radius: f32,
    /// Fixed color for every point; `None` colors each point by its position.
    pub point_color: Option<ColorRgb>,
    /// Extra points plotted at exact positions.
    pub fixed_points: Vec<Vec3>,
    pub axes: AxesConfig,
    /// Rotating the model pivot also rotates the data pivot.
    pub coupled_rotation: bool,
    pub animation: AnimationConfig,
    pub seed: Option<u64>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            range_min: 0.0,
            range_max: DEFAULT_PLOT_RANGE,
            point_count: 15,
            point_radius: 0.3,
            point_color: None,
            fixed_points: Vec::new(),
            axes: AxesConfig::default(),
            coupled_rotation: true,
            animation: AnimationConfig::default(),
            seed: None,
        }
    }
}

impl PlotConfig {
    pub fn range(&self) -> Result<Range, SceneError> {
        Range::new(self.range_min, self.range_max)
    }

    pub fn point_count(&self) -> Result<usize, SceneError> {
        usize::try_from(self.point_count).map_err(|_| SceneError::InvalidCount(self.point_count))
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.range()?;
        self.point_count()?;
        self.animation.validate()
    }
}
