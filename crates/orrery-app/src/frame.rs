//! The per-frame driver: fixed-rate scene ticks behind a variable-rate
//! render, using the accumulator pattern.

use std::time::Duration;

use glam::Vec3;
use orrery_config::{Config, SceneConfig};
use orrery_overlay::{FactsCarousel, PanelUpdate};
use orrery_scene::{ScenePopulation, Universe, solar_opacity};
use tracing::warn;

use crate::camera::OrbitCamera;

/// Fixed simulation timestep: 60 Hz.
pub const TICK_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp to prevent spiral of death.
/// Longer frames accept slowdown instead of a catch-up burst of ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Drawing surface for the scene. The driver owns all simulation state and
/// hands it over read-only once per frame.
pub trait Renderer {
    fn render(&mut self, universe: &Universe, camera: &OrbitCamera);
    /// Labels for bodies whose fade still permits them, as (text, anchor).
    fn render_labels(&mut self, labels: &[(&'static str, Vec3)]);
    fn resize(&mut self, width: u32, height: u32);
}

/// Receiver for overlay content: info-panel fields and carousel facts.
pub trait PanelSink {
    fn apply(&mut self, update: &PanelUpdate);
    fn show_fact(&mut self, fact: &'static str, counter: &str);
}

fn population_from(scene: &SceneConfig) -> ScenePopulation {
    ScenePopulation {
        stars: scene.star_count,
        nebulas: scene.nebula_count,
        gas_clouds: scene.gas_cloud_count,
        comets: scene.comet_count,
        asteroids: scene.asteroid_count,
        nearby_galaxies: scene.nearby_galaxy_count,
        distant_galaxies: scene.distant_galaxy_count,
    }
}

/// Owns the universe, camera, and overlay state; turns wall-clock frame
/// times into fixed simulation ticks.
pub struct FrameDriver {
    pub universe: Universe,
    pub camera: OrbitCamera,
    pub carousel: FactsCarousel,
    accumulator: f64,
    sim_time: f64,
    frame_count: u64,
}

impl FrameDriver {
    pub fn new(config: &Config) -> Self {
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        Self {
            universe: Universe::generate(config.scene.seed, population_from(&config.scene)),
            camera: OrbitCamera::new(&config.camera, aspect),
            carousel: FactsCarousel::new(),
            accumulator: 0.0,
            sim_time: 0.0,
            frame_count: 0,
        }
    }

    /// Run one frame with the measured wall-clock frame time in seconds.
    ///
    /// Order per frame: clamp the frame time, glide the camera, rotate the
    /// facts carousel, run zero or more fixed scene ticks, then hand the
    /// results to the renderer and panel.
    pub fn frame(
        &mut self,
        frame_time: f64,
        renderer: &mut impl Renderer,
        panel: &mut impl PanelSink,
    ) {
        let mut frame_time = frame_time;
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.camera.update();

        if self.carousel.tick(Duration::from_secs_f64(frame_time)) || self.frame_count == 0 {
            panel.show_fact(self.carousel.current(), &self.carousel.counter_text());
        }

        let camera_distance = self.camera.distance_from_origin();
        self.accumulator += frame_time;
        while self.accumulator >= TICK_DT {
            self.universe.advance(camera_distance, self.sim_time);
            self.sim_time += TICK_DT;
            self.accumulator -= TICK_DT;
        }

        // The info panel tracks planets, so it goes quiet once the solar
        // system has fully faded out.
        if solar_opacity(camera_distance) > 0.0 {
            let camera_position = self.camera.position();
            if let Some(nearest) = self.universe.nearest_planet(camera_position) {
                panel.apply(&PanelUpdate::new(camera_position, &nearest));
            }
        }

        renderer.render(&self.universe, &self.camera);
        let labels: Vec<(&'static str, Vec3)> = self
            .universe
            .planets
            .iter()
            .filter(|p| p.label_visible)
            .map(|p| (p.id.label(), p.position))
            .collect();
        renderer.render_labels(&labels);

        self.frame_count += 1;
    }

    pub fn resize(&mut self, renderer: &mut impl Renderer, width: u32, height: u32) {
        self.camera.resize(width, height);
        renderer.resize(width, height);
    }

    /// Total simulation time advanced so far, in seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Frames driven so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
