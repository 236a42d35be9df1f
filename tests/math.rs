mod tests {
    use calm_light::math::{interpolate, progress, ramp, ramp_u8};
    use embassy_time::Duration;

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(0.0, (0.0, 10.0), (100.0, 200.0)), 100.0);
        assert_eq!(interpolate(10.0, (0.0, 10.0), (100.0, 200.0)), 200.0);
        assert_eq!(interpolate(3.0, (3.0, 7.0), (255.0, 0.0)), 255.0);
        assert_eq!(interpolate(7.0, (3.0, 7.0), (255.0, 0.0)), 0.0);
    }

    #[test]
    fn test_interpolate_midpoint() {
        assert_eq!(interpolate(5.0, (0.0, 10.0), (100.0, 200.0)), 150.0);
        assert_eq!(interpolate(0.5, (0.0, 1.0), (200.0, 0.0)), 100.0);
    }

    #[test]
    fn test_interpolate_extrapolates() {
        assert_eq!(interpolate(20.0, (0.0, 10.0), (100.0, 200.0)), 300.0);
        assert_eq!(interpolate(-10.0, (0.0, 10.0), (100.0, 200.0)), 0.0);
    }

    #[test]
    fn test_progress() {
        let span = Duration::from_millis(100);
        assert_eq!(progress(Duration::from_millis(0), span), 0.0);
        assert_eq!(progress(Duration::from_millis(50), span), 0.5);
        assert_eq!(progress(Duration::from_millis(100), span), 1.0);
        assert_eq!(progress(Duration::from_millis(5), Duration::from_ticks(0)), 1.0);
    }

    #[test]
    fn test_ramp() {
        let span = Duration::from_secs(4);
        assert_eq!(ramp(Duration::from_secs(1), span, 0.0, 8.0), 2.0);
        assert_eq!(ramp(Duration::from_secs(4), span, 8.0, 0.0), 0.0);
    }

    #[test]
    fn test_ramp_u8() {
        let span = Duration::from_millis(10);
        assert_eq!(ramp_u8(Duration::from_millis(0), span, 0, 200), 0);
        assert_eq!(ramp_u8(Duration::from_millis(5), span, 0, 200), 100);
        assert_eq!(ramp_u8(Duration::from_millis(10), span, 0, 200), 200);
        assert_eq!(ramp_u8(Duration::from_millis(10), span, 200, 0), 0);
    }

    #[test]
    fn test_ramp_u8_clamps() {
        let span = Duration::from_millis(10);
        assert_eq!(ramp_u8(Duration::from_millis(20), span, 0, 200), 255);
        assert_eq!(ramp_u8(Duration::from_millis(20), span, 200, 100), 0);
    }

    #[test]
    fn test_ramp_u8_empty_span() {
        assert_eq!(ramp_u8(Duration::from_ticks(0), Duration::from_ticks(0), 40, 90), 90);
    }
}
