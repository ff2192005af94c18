pub mod animation;
pub mod camera;
pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod math;
pub mod pivot;
pub mod plot;
pub mod rendering;
pub mod scene_graph;
pub mod window;

pub use animation::{AnimationLoop, StopHandle};
pub use color::{map_coordinate_to_color, ColorRgb};
pub use config::{AnimationConfig, AxesConfig, PlotConfig};
pub use context::SceneContext;
pub use error::SceneError;
pub use math::Range;
pub use pivot::{PivotRig, PivotState};
