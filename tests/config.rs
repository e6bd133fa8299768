mod tests {
    use embassy_time::Duration;
    use pwm_dimmer::{ControllerConfig, Mode, ModeCycle};

    #[test]
    fn test_mode_cycle_rejects_invalid_sets() {
        assert!(ModeCycle::new(&[]).is_none());
        assert!(ModeCycle::new(&[Mode::Static, Mode::Static]).is_none());
    }

    #[test]
    fn test_mode_cycle_wraps() {
        let cycle = ModeCycle::new(&[Mode::Static, Mode::RandomFade, Mode::FireFlicker]).unwrap();
        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle.next(Mode::Static), Mode::RandomFade);
        assert_eq!(cycle.next(Mode::RandomFade), Mode::FireFlicker);
        assert_eq!(cycle.next(Mode::FireFlicker), Mode::Static);
        // Modes outside the cycle restart it
        assert_eq!(cycle.next(Mode::Scheduled), Mode::Static);
        assert_eq!(cycle.position(Mode::FireFlicker), Some(2));
    }

    #[test]
    fn test_default_config() {
        let config = ControllerConfig::default();
        assert_eq!(config.modes.as_slice(), &Mode::ALL);
        assert_eq!(config.brightness_step, 8);
        assert_eq!(config.adjust_interval, Duration::from_millis(30));
        assert_eq!(config.blink.level, 16);
        assert_eq!(config.blink.on, Duration::from_millis(250));
        assert_eq!(config.schedule_period, Duration::from_secs(60));
    }
}
