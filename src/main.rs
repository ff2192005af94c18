use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use plotgine::cli::Cli;
use plotgine::rendering::headless::LogRenderer;
use plotgine::{window, AnimationLoop, SceneContext};

const HEADLESS_DEFAULT_TICKS: u64 = 600;
const HEADLESS_LOG_EVERY: u64 = 60;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = cli.plot_config();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut context =
        SceneContext::build(&config, &mut rng).context("Invalid plot configuration")?;
    let mut animation = AnimationLoop::new(config.animation.clone());

    if cli.headless {
        let mut renderer = LogRenderer::new(HEADLESS_LOG_EVERY);
        let max_ticks = cli.ticks.unwrap_or(HEADLESS_DEFAULT_TICKS);
        let frames = animation
            .run(&mut context, &mut renderer, Some(max_ticks))
            .unwrap_or_else(|never| match never {});
        log::info!("Rendered {frames} headless frames");
        return Ok(());
    }

    pollster::block_on(window::run(context, animation, cli.ticks))?;

    Ok(())
}
