//! Wall-clock timing for report sections.

/// Run a block, returning its value together with the elapsed
/// [`std::time::Duration`].
///
/// Logs the timing via `tracing::debug!` with fields:
/// - `operation`: the section label
/// - `elapsed_ms`: elapsed milliseconds
#[macro_export]
macro_rules! measure_time {
    ($label:expr, $block:block) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        let __elapsed = __start.elapsed();
        ::tracing::debug!(
            operation = $label,
            elapsed_ms = __elapsed.as_millis() as u64,
            "Operation completed"
        );
        (__result, __elapsed)
    }};
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_block_value_and_duration() {
        let (value, elapsed) = measure_time!("sum", { (1..=10u32).sum::<u32>() });
        assert_eq!(value, 55);
        assert!(elapsed.as_secs() < 60);
    }
}
