//! Time label formatting.

/// Format seconds as `MM:SS`.
///
/// Minutes are not capped, so an hour-long clip reads `61:01` rather than
/// rolling over. Missing, negative and non-finite values format as `00:00`.
pub fn format_time(seconds: Option<f64>) -> String {
    let t = match seconds {
        Some(t) if t.is_finite() && t > 0.0 => t,
        _ => 0.0,
    };
    let minutes = (t / 60.0).floor() as u64;
    let secs = (t % 60.0).floor() as u64;
    format!("{minutes:02}:{secs:02}")
}
