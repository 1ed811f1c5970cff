//! Frame-by-frame animation of a recomputed series.
//!
//! See [`Animation`] and [`ShowConfig`] for usage.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

/// Configuration for rendering an [`Animation`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// animation.show(
///     ShowConfig::new()
///         .title("Gravitational Wave Animation")
///         .x_label("Time (s)")
///         .y_label("Gravitational Wave Strain"),
/// )?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    frame_interval: Duration,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title or axis labels and a 200 ms
    /// frame interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            frame_interval: Duration::from_millis(200),
        }
    }

    /// Sets the window and plot title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Sets the time each frame stays on screen.
    #[must_use]
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays a series by recomputing it over growing prefixes of its x values.
///
/// Frame `k` shows the first `k` x values against `series(&xs[..k])`, so
/// frame 0 is empty and the last frame shows the whole curve. Nothing is
/// carried between frames except the prefix length, which requires `series`
/// to be a pure function of its slice.
///
/// The axes are fixed for the whole animation: x spans the first to the last
/// x value and y spans the minimum to the maximum of the full series.
pub struct Animation<F> {
    xs: Vec<f64>,
    series: F,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl<F> Animation<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    /// Creates an animation over `xs`, evaluating the full series once to fix
    /// the y-axis range.
    pub fn new(xs: Vec<f64>, series: F) -> Self {
        let x_bounds = match (xs.first(), xs.last()) {
            (Some(&first), Some(&last)) => [first, last],
            _ => [0.0, 0.0],
        };
        let y_bounds = bounds(&series(&xs));

        Self {
            xs,
            series,
            x_bounds,
            y_bounds,
        }
    }

    /// Returns the number of frames, including the empty first frame.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.xs.len() + 1
    }

    /// Returns the points shown in frame `index`.
    ///
    /// Indices past the last frame return the last frame.
    #[must_use]
    pub fn frame(&self, index: usize) -> Vec<[f64; 2]> {
        let prefix = &self.xs[..index.min(self.xs.len())];
        prefix
            .iter()
            .zip((self.series)(prefix))
            .map(|(&x, y)| [x, y])
            .collect()
    }

    /// Returns the fixed x-axis range.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    /// Returns the fixed y-axis range.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }
}

impl<F> Animation<F>
where
    F: Fn(&[f64]) -> Vec<f64> + 'static,
{
    /// Opens a blocking egui window that plays the animation once.
    ///
    /// The last frame stays on screen until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(AnimationApp {
                    animation: self,
                    config,
                    started: Instant::now(),
                }))
            }),
        )
    }
}

/// Returns `[min, max]` of the finite values, or `[0, 0]` if there are none.
fn bounds(values: &[f64]) -> [f64; 2] {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        [0.0, 0.0]
    } else {
        [min, max]
    }
}

/// The egui [`eframe::App`] that plays an [`Animation`].
struct AnimationApp<F> {
    animation: Animation<F>,
    config: ShowConfig,
    started: Instant,
}

impl<F> AnimationApp<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    /// Returns the frame due at the current wall-clock time.
    fn current_frame(&self) -> usize {
        let interval = self.config.frame_interval.as_secs_f64().max(f64::EPSILON);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let due = (self.started.elapsed().as_secs_f64() / interval) as usize;
        due.min(self.animation.frame_count() - 1)
    }
}

impl<F> eframe::App for AnimationApp<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let index = self.current_frame();
        let points: PlotPoints = self.animation.frame(index).into_iter().collect();
        let [x_min, x_max] = self.animation.x_bounds();
        let [y_min, y_max] = self.animation.y_bounds();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = &self.config.title {
                ui.heading(title);
            }

            let mut plot = Plot::new("animation")
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false);
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.as_str());
            }

            plot.show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
                plot_ui.line(Line::new(points));
            });
        });

        if index + 1 < self.animation.frame_count() {
            ctx.request_repaint_after(self.config.frame_interval);
        }
    }
}
