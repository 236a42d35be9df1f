use embassy_time::Duration;

/// Map `value` linearly from `source` onto `target`
///
/// Values outside of `source` extrapolate, nothing is clamped.
///
/// `source` must not be zero-length (`source.0 != source.1`), otherwise the
/// result is not finite. Use [`ramp`] for time windows that may be empty.
#[inline]
pub fn interpolate(value: f32, source: (f32, f32), target: (f32, f32)) -> f32 {
    let span_source = source.1 - source.0;
    let span_target = target.1 - target.0;
    let scaled = (value - source.0) / span_source;
    target.0 + scaled * span_target
}

/// Fraction (0.0-1.0 for `elapsed <= span`) of a time window that has passed
///
/// An empty window counts as complete.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[inline]
pub fn progress(elapsed: Duration, span: Duration) -> f32 {
    if span.as_micros() == 0 {
        return 1.0;
    }
    (elapsed.as_micros() as f64 / span.as_micros() as f64) as f32
}

/// Interpolate between `from` and `to` by the time elapsed in a window
#[inline]
pub fn ramp(elapsed: Duration, span: Duration, from: f32, to: f32) -> f32 {
    interpolate(progress(elapsed, span), (0.0, 1.0), (from, to))
}

/// Integral [`ramp`] for device values
///
/// Truncates toward zero and clamps to the 0-255 range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub fn ramp_u8(elapsed: Duration, span: Duration, from: u8, to: u8) -> u8 {
    let value = ramp(elapsed, span, f32::from(from), f32::from(to));
    value.clamp(0.0, 255.0) as u8
}
