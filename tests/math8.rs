mod tests {
    use embassy_time::Duration;
    use myrtio_blade::math8::{fade8, nibble_level, progress_steps, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_fade8_is_eighty_percent() {
        for value in 0..=u8::MAX {
            assert_eq!(u16::from(fade8(value)), u16::from(value) * 4 / 5);
        }
    }

    #[test]
    fn test_nibble_level() {
        assert_eq!(nibble_level(0, 32), 0);
        assert_eq!(nibble_level(7, 32), 14);
        assert_eq!(nibble_level(15, 32), 32);
        assert_eq!(nibble_level(15, 255), 255);
        assert_eq!(nibble_level(0x1F, 32), 32);
    }

    #[test]
    fn test_progress_steps() {
        let duration = Duration::from_millis(280);
        assert_eq!(progress_steps(Duration::from_millis(0), duration, 20), 0);
        assert_eq!(progress_steps(Duration::from_millis(140), duration, 20), 10);
        // 0.357 of a step rounds down, 0.714 rounds up
        assert_eq!(progress_steps(Duration::from_millis(5), duration, 20), 0);
        assert_eq!(progress_steps(Duration::from_millis(10), duration, 20), 1);
        assert_eq!(progress_steps(Duration::from_millis(280), duration, 20), 20);
        assert_eq!(progress_steps(Duration::from_millis(900), duration, 20), 20);
    }

    #[test]
    fn test_progress_steps_zero_duration() {
        let zero = Duration::from_millis(0);
        assert_eq!(progress_steps(zero, zero, 144), 144);
    }
}
