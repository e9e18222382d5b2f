//! Demo binary: compare the three summation rules on sin over [0, pi],
//! render the Riemann rectangles and a log-log convergence chart to SVG
//! files in the current directory.

use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sumr::{
    Domain, Method, PlotOptions, RiemannSession, SamplePoint, render_loglog_svg,
    render_riemann_svg, sweep,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let exact = 2.0;
    let mut rng = StdRng::seed_from_u64(2023);

    println!("integral of sin(x) over [0, pi] = {exact}");
    println!("{:>6} {:>12} {:>12} {:>12}", "n", "riemann", "trapezoid", "simpson");
    for num_points in [5, 9, 17, 33] {
        let mut session = RiemannSession::new();
        session.set_function(|x: f64| x.sin());
        session.set_domain(Domain::new(0.0, PI, num_points)?)?;
        let riemann = session.riemann_sum(&mut rng)?;
        println!(
            "{:>6} {:>12.8} {:>12.8} {:>12.8}",
            num_points,
            riemann,
            session.trapezoid_sum(),
            session.simpson_sum()
        );
    }

    // An unknown sample-point keyword logs a warning and falls back to
    // midpoints.
    let mode = SamplePoint::parse_lossy("foo");
    println!("parse_lossy(\"foo\") resolved to {mode}");

    // Random partition with random sample points, reproducible via the
    // seed above.
    let mut session = RiemannSession::new();
    session.set_function(|x: f64| x.sin());
    session.set_domain(Domain::new(0.0, PI, 9)?)?;
    session.set_sample_point(SamplePoint::Random);
    session.set_random_partition(&mut rng)?;
    session.riemann_sum(&mut rng)?;
    if let Some(title) = session.title() {
        println!("{title} (norm {:.4})", session.norm());
    }
    let svg = render_riemann_svg(&session, &PlotOptions::default(), 1000, 800)?;
    std::fs::write("riemann.svg", svg)?;
    println!("wrote riemann.svg");

    // Norm versus error for the midpoint rule on uniform partitions.
    let points = sweep(
        f64::sin,
        0.0,
        PI,
        &[5, 9, 17, 33, 65, 129],
        exact,
        Method::Riemann(SamplePoint::Mid),
        &mut rng,
    )?;
    let norms: Vec<f64> = points.iter().map(|p| p.norm).collect();
    let errors: Vec<f64> = points.iter().map(|p| p.error).collect();
    let svg = render_loglog_svg(&norms, &errors, &PlotOptions::default(), 1000, 800)?;
    std::fs::write("convergence.svg", svg)?;
    println!("wrote convergence.svg");

    Ok(())
}
