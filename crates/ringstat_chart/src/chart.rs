//! Ring chart component
//!
//! Owns the dataset, geometry and animation state and feeds them to the
//! renderer on each draw. Assigning a dataset restarts the reveal animation.
//!
//! The host drives two things: size changes (`on_resize`) and frames
//! (ticking the scheduler, then calling `draw` when a redraw was requested).

use std::cell::Cell;
use std::rc::Rc;

use ringstat_animation::{AnimationDriver, SchedulerHandle};
use ringstat_core::DrawContext;

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::ChartGeometry;
use crate::palette::Palette;
use crate::renderer::ChartRenderer;

/// Length of one reveal animation
pub const ANIMATION_DURATION_MS: u32 = 5000;

/// An animated ring chart
pub struct RingChart {
    config: ChartConfig,
    renderer: ChartRenderer,
    dataset: Dataset,
    geometry: ChartGeometry,
    progress: Rc<Cell<f32>>,
    needs_redraw: Rc<Cell<bool>>,
    driver: AnimationDriver,
}

impl RingChart {
    /// Create a chart; validates `config`
    pub fn new(config: ChartConfig, scheduler: SchedulerHandle) -> Result<Self> {
        let renderer = ChartRenderer::new(&config);
        Self::with_renderer(config, renderer, scheduler)
    }

    /// Create a chart whose fallback colors come from a seeded palette
    pub fn with_seed(config: ChartConfig, scheduler: SchedulerHandle, seed: u64) -> Result<Self> {
        let palette = Palette::with_seed(config.palette.clone(), config.fallback_colors, seed);
        let renderer = ChartRenderer::with_palette(&config, palette);
        Self::with_renderer(config, renderer, scheduler)
    }

    fn with_renderer(
        config: ChartConfig,
        renderer: ChartRenderer,
        scheduler: SchedulerHandle,
    ) -> Result<Self> {
        config.validate()?;

        let progress = Rc::new(Cell::new(0.0));
        let needs_redraw = Rc::new(Cell::new(false));
        let driver = {
            let progress = Rc::clone(&progress);
            let needs_redraw = Rc::clone(&needs_redraw);
            AnimationDriver::new(scheduler, ANIMATION_DURATION_MS, move |value| {
                progress.set(value);
                needs_redraw.set(true);
            })
        };

        Ok(Self {
            config,
            renderer,
            dataset: Dataset::default(),
            geometry: ChartGeometry::default(),
            progress,
            needs_redraw,
            driver,
        })
    }

    /// Replace the dataset and restart the reveal animation from zero
    pub fn set_dataset(&mut self, dataset: impl Into<Dataset>) {
        self.dataset = dataset.into();
        // Cancels the previous cycle before anything else can tick
        self.driver.start(ANIMATION_DURATION_MS);
        self.progress.set(0.0);
        self.needs_redraw.set(true);
        tracing::debug!(
            "dataset set: {} segments, total {:.4}, cycle {}",
            self.dataset.len(),
            self.dataset.sum(),
            self.driver.cycle()
        );
    }

    /// Recompute geometry for a new surface size
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.geometry = ChartGeometry::new(width, height, self.config.stroke_width);
        self.needs_redraw.set(true);
        tracing::debug!(
            "resized to {}x{}: radius {}",
            width,
            height,
            self.geometry.radius
        );
    }

    /// Draw the current frame; returns the number of arcs issued
    pub fn draw(&mut self, ctx: &mut dyn DrawContext) -> usize {
        self.renderer
            .render(ctx, &self.dataset, &self.geometry, self.progress.get())
    }

    /// Check and clear the redraw request raised by ticks, resizes and
    /// dataset changes
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Current reveal progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// True while the reveal animation is still running
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Number of animation cycles started so far
    pub fn cycle(&self) -> u64 {
        self.driver.cycle()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}
