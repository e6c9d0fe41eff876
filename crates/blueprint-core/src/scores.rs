//! Score helpers shared by every scoring stage.

/// Clamp to [0.0, 1.0]. NaN collapses to 0.0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp then round, the canonical form of every published score.
pub fn unit_score(value: f64) -> f64 {
    round2(clamp_unit(value))
}

/// Arithmetic mean, 0.0 for an empty input.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `min(count / saturation, 1.0)`, 0.0 when saturation is not positive.
pub fn saturate(count: f64, saturation: f64) -> f64 {
    if saturation <= 0.0 {
        return 0.0;
    }
    (count / saturation).min(1.0)
}

/// Descending comparison for scores; NaN sorts as equal.
pub fn desc(a: f64, b: f64) -> std::cmp::Ordering {
    b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
}
