//! Common helpers: rounding and display of optional averages.

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Format an optional average with `places` decimals, or `N/A` when absent.
pub fn format_average(average: Option<f64>, places: usize) -> String {
    match average {
        Some(value) => format!("{:.*}", places, value),
        None => "N/A".to_string(),
    }
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
