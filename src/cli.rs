use clap::Parser;
use glam::Vec3;

use crate::color::ColorRgb;
use crate::config::{AnimationConfig, AxesConfig, PlotConfig, DEFAULT_PLOT_RANGE};

#[derive(Parser, Debug, Clone)]
#[command(name = "plotgine")]
#[command(about = "Animated 3D scatter plot with Cartesian axes", long_about = None)]
pub struct Cli {
    /// Number of random points to plot
    #[arg(long = "points", default_value_t = 15, allow_negative_numbers = true)]
    pub point_count: i64,

    /// Lower bound of the plot range on every axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub range_min: f32,

    /// Upper bound of the plot range on every axis
    #[arg(long, default_value_t = DEFAULT_PLOT_RANGE, allow_negative_numbers = true)]
    pub range_max: f32,

    /// Radius of each plotted point
    #[arg(long, default_value_t = 0.3)]
    pub point_radius: f32,

    /// Single color for every point (#rrggbb). Points are colored by position if omitted
    #[arg(long)]
    pub color: Option<ColorRgb>,

    /// Extra point at x,y,z. May be repeated
    #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
    pub fixed_points: Vec<Vec3>,

    /// Axis length; defaults to the upper bound of the range
    #[arg(long)]
    pub axis_length: Option<f32>,

    /// Draw the axes without arrowheads
    #[arg(long)]
    pub no_arrowheads: bool,

    /// Let the model pivot rotate without dragging the data along
    #[arg(long)]
    pub uncoupled: bool,

    #[arg(long)]
    pub no_rotate_data: bool,

    #[arg(long)]
    pub no_rotate_model: bool,

    #[arg(long)]
    pub no_scale: bool,

    /// Data pivot rotation per frame, in radians
    #[arg(long, default_value_t = 0.02, allow_negative_numbers = true)]
    pub data_speed: f32,

    /// Model pivot rotation per frame, in radians
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    pub model_speed: f32,

    /// Data pivot scale step per frame
    #[arg(long, default_value_t = 0.005)]
    pub scale_speed: f32,

    #[arg(long, default_value_t = 0.5)]
    pub scale_min: f32,

    #[arg(long, default_value_t = 2.25)]
    pub scale_max: f32,

    /// Seed for reproducible point clouds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without a window, logging frames instead of drawing them
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many frames
    #[arg(long)]
    pub ticks: Option<u64>,
}

fn parse_point(value: &str) -> Result<Vec3, String> {
    let coordinates = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid coordinate in {value:?}: {err}"))?;

    match coordinates.as_slice() {
        &[x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(format!("expected x,y,z, got {value:?}")),
    }
}

impl Cli {
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            range_min: self.range_min,
            range_max: self.range_max,
            point_count: self.point_count,
            point_radius: self.point_radius,
            point_color: self.color,
            fixed_points: self.fixed_points.clone(),
            axes: AxesConfig {
                length: self.axis_length.unwrap_or(self.range_max),
                arrowheads: !self.no_arrowheads,
                ..Default::default()
            },
            coupled_rotation: !self.uncoupled,
            animation: AnimationConfig {
                rotate_data: !self.no_rotate_data,
                rotate_model: !self.no_rotate_model,
                oscillate_scale: !self.no_scale,
                data_rotation_speed: self.data_speed,
                model_rotation_speed: self.model_speed,
                scale_speed: self.scale_speed,
                scale_min: self.scale_min,
                scale_max: self.scale_max,
            },
            seed: self.seed,
        }
    }
}
