//! Rendering of Riemann sums and convergence data.
//!
//! The drawing functions target any [`plotters`] backend through a
//! [`DrawingArea`]; the `render_*_svg` helpers bundle the common case of
//! rendering into an SVG string. Scenes are drawn without any text by
//! default so that no font setup is required; set
//! [`PlotOptions::title`] only after registering a font with
//! `plotters::style::register_font`.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::common::{evaluate, linspace};
use crate::error::{SumError, SumResult};
use crate::session::RiemannSession;

/// Default curve color, a dark maroon: RGB(123, 17, 19).
pub const MAROON: RGBColor = RGBColor(123, 17, 19);

/// Default rectangle fill color, a deep green: RGB(1, 68, 33).
pub const DARK_GREEN: RGBColor = RGBColor(1, 68, 33);

const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);

/// Options for the drawing functions.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Number of grid points used to trace the function curve (default: 100)
    pub grid_size: usize,

    /// Draw a stem from the axis to each sampled height (default: true)
    pub show_height: bool,

    /// Draw background grid lines (default: true)
    pub show_grid: bool,

    /// Force the same data-units-per-pixel scale on both axes
    /// (default: false)
    pub equal_axis: bool,

    /// Color of the function curve (default: [`MAROON`])
    pub curve_color: RGBColor,

    /// Fill color of the sum rectangles (default: [`DARK_GREEN`])
    pub face_color: RGBColor,

    /// Edge color of the sum rectangles (default: black)
    pub edge_color: RGBColor,

    /// Opacity of the rectangle fill, in `[0, 1]` (default: 0.5)
    pub alpha: f64,

    /// Caption drawn above the chart. Text rendering needs a font
    /// registered with `plotters::style::register_font` (default: none)
    pub title: Option<String>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            grid_size: 100,
            show_height: true,
            show_grid: true,
            equal_axis: false,
            curve_color: MAROON,
            face_color: DARK_GREEN,
            edge_color: BLACK,
            alpha: 0.5,
            title: None,
        }
    }
}

impl PlotOptions {
    /// Create options with a caption.
    pub fn with_title<S: Into<String>>(title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

fn draw_error<E: std::fmt::Display>(err: E) -> SumError {
    SumError::Render {
        message: err.to_string(),
    }
}

/// Pad a data range on both sides so the scene does not touch the frame.
fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - 0.05 * span, max + 0.05 * span)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// Expand one of the ranges so both axes map data units to pixels at the
/// same scale.
fn equalize_axes(
    (width, height): (u32, u32),
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> ((f64, f64), (f64, f64)) {
    if width == 0 || height == 0 {
        return (x_range, y_range);
    }
    let x_per_px = (x_range.1 - x_range.0) / f64::from(width);
    let y_per_px = (y_range.1 - y_range.0) / f64::from(height);
    if x_per_px > y_per_px {
        let span = x_per_px * f64::from(height);
        let mid = 0.5 * (y_range.0 + y_range.1);
        (x_range, (mid - 0.5 * span, mid + 0.5 * span))
    } else {
        let span = y_per_px * f64::from(width);
        let mid = 0.5 * (x_range.0 + x_range.1);
        ((mid - 0.5 * span, mid + 0.5 * span), y_range)
    }
}

/// Draw a session's cached Riemann sum: the function curve over the
/// domain, one rectangle per sub-interval, optional height stems and grid
/// lines, and the zero axes.
///
/// # Errors
///
/// Returns [`SumError::InvalidInput`] when the session has no cached sum
/// (call [`RiemannSession::riemann_sum`] first) or when
/// [`PlotOptions::grid_size`] is below 2, and [`SumError::Render`] when
/// the backend fails.
pub fn draw_riemann<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    session: &RiemannSession,
    options: &PlotOptions,
) -> SumResult<()> {
    if options.grid_size < 2 {
        return Err(SumError::InvalidInput {
            context: format!(
                "draw_riemann: grid_size must be at least 2 (got {})",
                options.grid_size
            ),
        });
    }
    let (samples, result) = match (session.samples(), session.last_sum()) {
        (Some(samples), Some(result)) => (samples, result),
        _ => {
            return Err(SumError::InvalidInput {
                context: "draw_riemann: no cached sum; call RiemannSession::riemann_sum first"
                    .to_string(),
            });
        }
    };

    let domain = session.domain();
    let grid = linspace(
        domain.left_endpoint,
        domain.right_endpoint,
        options.grid_size,
    );
    let curve_heights = evaluate(|x| session.function_value(x), &grid);
    let curve: Vec<(f64, f64)> = grid.into_iter().zip(curve_heights).collect();

    let mut y_min = 0.0_f64;
    let mut y_max = 0.0_f64;
    for y in curve
        .iter()
        .map(|&(_, y)| y)
        .chain(result.heights.iter().copied())
    {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let mut x_range = padded(domain.left_endpoint, domain.right_endpoint);
    let mut y_range = padded(y_min, y_max);
    if options.equal_axis {
        (x_range, y_range) = equalize_axes(area.dim_in_pixel(), x_range, y_range);
    }

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if let Some(title) = &options.title {
        builder.caption(title, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(draw_error)?;

    if options.show_grid {
        chart
            .configure_mesh()
            .disable_axes()
            .light_line_style(&LIGHT_GRAY)
            .bold_line_style(&LIGHT_GRAY)
            .draw()
            .map_err(draw_error)?;
    }

    let fill = options.face_color.mix(options.alpha).filled();
    let edge = ShapeStyle::from(&options.edge_color);
    let nodes = session.partition().points();
    chart
        .draw_series(
            nodes
                .windows(2)
                .zip(result.heights.iter())
                .map(|(w, &h)| Rectangle::new([(w[0], 0.0), (w[1], h)], fill)),
        )
        .map_err(draw_error)?;
    chart
        .draw_series(
            nodes
                .windows(2)
                .zip(result.heights.iter())
                .map(|(w, &h)| Rectangle::new([(w[0], 0.0), (w[1], h)], edge)),
        )
        .map_err(draw_error)?;

    if options.show_height {
        chart
            .draw_series(
                samples
                    .iter()
                    .zip(result.heights.iter())
                    .map(|(&s, &h)| PathElement::new(vec![(s, 0.0), (s, h)], &BLACK)),
            )
            .map_err(draw_error)?;
    }

    chart
        .draw_series(std::iter::once(PathElement::new(
            curve,
            ShapeStyle::from(&options.curve_color).stroke_width(2),
        )))
        .map_err(draw_error)?;

    // Zero axes, drawn where they fall inside the view.
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(x_range.0, 0.0), (x_range.1, 0.0)],
            &BLACK,
        )))
        .map_err(draw_error)?;
    if x_range.0 < 0.0 && x_range.1 > 0.0 {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, y_range.0), (0.0, y_range.1)],
                &BLACK,
            )))
            .map_err(draw_error)?;
    }

    Ok(())
}

/// Draw `ydata` against `xdata` on logarithmic axes, as a line with one
/// marker per point. Intended for partition norm versus approximation
/// error from [`crate::sweep`].
///
/// # Errors
///
/// Returns [`SumError::InvalidInput`] when the slices are empty, have
/// different lengths, or contain non-positive values, and
/// [`SumError::Render`] when the backend fails.
pub fn draw_loglog<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    xdata: &[f64],
    ydata: &[f64],
    options: &PlotOptions,
) -> SumResult<()> {
    if xdata.len() != ydata.len() {
        return Err(SumError::InvalidInput {
            context: format!(
                "draw_loglog: xdata and ydata lengths differ ({} vs {})",
                xdata.len(),
                ydata.len()
            ),
        });
    }
    if xdata.is_empty() {
        return Err(SumError::InvalidInput {
            context: "draw_loglog: no data".to_string(),
        });
    }
    if xdata.iter().chain(ydata).any(|&v| !(v > 0.0)) {
        return Err(SumError::InvalidInput {
            context: "draw_loglog: logarithmic axes need strictly positive data".to_string(),
        });
    }

    let mut x_bounds = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y_bounds = (f64::INFINITY, f64::NEG_INFINITY);
    for (&x, &y) in xdata.iter().zip(ydata) {
        x_bounds = (x_bounds.0.min(x), x_bounds.1.max(x));
        y_bounds = (y_bounds.0.min(y), y_bounds.1.max(y));
    }

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if let Some(title) = &options.title {
        builder.caption(title, ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(
            (0.5 * x_bounds.0..2.0 * x_bounds.1).log_scale(),
            (0.5 * y_bounds.0..2.0 * y_bounds.1).log_scale(),
        )
        .map_err(draw_error)?;

    if options.show_grid {
        chart
            .configure_mesh()
            .disable_axes()
            .light_line_style(&LIGHT_GRAY)
            .bold_line_style(&LIGHT_GRAY)
            .draw()
            .map_err(draw_error)?;
    }

    let series: Vec<(f64, f64)> = xdata.iter().copied().zip(ydata.iter().copied()).collect();
    chart
        .draw_series(LineSeries::new(
            series.iter().copied(),
            ShapeStyle::from(&options.curve_color).stroke_width(2),
        ))
        .map_err(draw_error)?;
    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, options.curve_color.filled())),
        )
        .map_err(draw_error)?;

    Ok(())
}

/// Render a session's cached Riemann sum to an SVG document.
pub fn render_riemann_svg(
    session: &RiemannSession,
    options: &PlotOptions,
    width: u32,
    height: u32,
) -> SumResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;
        draw_riemann(&root, session, options)?;
        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

/// Render a log-log plot to an SVG document.
pub fn render_loglog_svg(
    xdata: &[f64],
    ydata: &[f64],
    options: &PlotOptions,
    width: u32,
    height: u32,
) -> SumResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;
        draw_loglog(&root, xdata, ydata, options)?;
        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}
