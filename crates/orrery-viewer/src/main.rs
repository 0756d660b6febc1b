//! Orrery viewer entry point.
//!
//! Loads configuration, initializes logging, builds the universe, and runs a
//! scripted camera tour from the inner solar system out to the universe view.
//! Render output goes to structured logs; the driver's [`Renderer`] and
//! [`PanelSink`] seams are where a windowed frontend plugs in.
//!
//! Run with: `cargo run -p orrery-viewer`

use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
use orrery_app::{FrameDriver, OrbitCamera, PanelSink, Renderer, TICK_DT};
use orrery_config::{CliArgs, Config};
use orrery_overlay::PanelUpdate;
use orrery_scene::Universe;
use tracing::{debug, info, warn};

/// Log-based render surface: reports scene visibility once a second.
#[derive(Default)]
struct TraceRenderer {
    frames: u64,
}

impl Renderer for TraceRenderer {
    fn render(&mut self, universe: &Universe, camera: &OrbitCamera) {
        self.frames += 1;
        if self.frames % 60 != 0 {
            return;
        }
        let planet_opacity = universe
            .planets
            .iter()
            .find(|p| !p.id.is_sun())
            .map_or(0.0, |p| p.opacity);
        let nebula_opacity = universe.nebulas.first().map_or(0.0, |n| n.opacity);
        let belt_opacity = universe.belt.first().map_or(0.0, |m| m.opacity);
        info!(
            distance = format!("{:.0}", camera.distance_from_origin()),
            planet_opacity = format!("{:.2}", planet_opacity),
            nebula_opacity = format!("{:.2}", nebula_opacity),
            shell_opacity = format!("{:.2}", universe.shell.opacity),
            belt_opacity = format!("{:.2}", belt_opacity),
            "scene"
        );
    }

    fn render_labels(&mut self, labels: &[(&'static str, Vec3)]) {
        if self.frames % 60 == 0 {
            debug!(count = labels.len(), "visible labels");
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        info!("Render surface resized to {width}x{height}");
    }
}

/// Log-based overlay surface.
#[derive(Default)]
struct TracePanel;

impl PanelSink for TracePanel {
    fn apply(&mut self, update: &PanelUpdate) {
        debug!(
            nearest = update.nearest_name,
            camera = %update.camera_position,
            earth_distance = %update.earth_distance,
            "info panel"
        );
    }

    fn show_fact(&mut self, fact: &'static str, counter: &str) {
        info!("Space fact {counter}: {fact}");
    }
}

fn resolve_config_dir(args: &CliArgs) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("orrery")))
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = resolve_config_dir(&args);
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|err| {
            eprintln!("Failed to load config from {}: {err}", dir.display());
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Orrery - solar system and universe viewer");
    info!(
        "Window: {}x{} | Seed: {} | Stars: {} | Asteroids: {}",
        config.window.width,
        config.window.height,
        config.scene.seed,
        config.scene.star_count,
        config.scene.asteroid_count,
    );

    let mut driver = FrameDriver::new(&config);
    let mut renderer = TraceRenderer::default();
    let mut panel = TracePanel;

    // Scripted tour: hold the solar-system view for five seconds, then zoom
    // all the way out and let the damped camera glide through every fade
    // band. 45 seconds covers the full transition and two fact rotations.
    let total_frames = (45.0 / TICK_DT) as u64;
    let zoom_frame = (5.0 / TICK_DT) as u64;

    for frame in 0..total_frames {
        if frame == zoom_frame {
            info!("Beginning zoom-out to the universe view");
            driver.camera.zoom(100.0);
        }
        driver.frame(TICK_DT, &mut renderer, &mut panel);
    }

    let final_distance = driver.camera.distance_from_origin();
    if final_distance < config.camera.max_distance * 0.99 {
        warn!("Tour ended short of the configured maximum distance: {final_distance:.0}");
    }
    info!(
        "Tour complete: {} frames, {:.0}s simulated, final distance {:.0}",
        driver.frame_count(),
        driver.sim_time(),
        final_distance,
    );
}
