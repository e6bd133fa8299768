mod tests {
    use pwm_dimmer::math8::{ease_toward, random_in, random_u8, scale_to, trim_to_range, trim_to_u8};
    use tinyrand::{Seeded, StdRand};

    #[test]
    fn test_scale_to() {
        assert_eq!(scale_to(255, 200), 200);
        assert_eq!(scale_to(0, 200), 0);
        assert_eq!(scale_to(128, 255), 128);
        assert_eq!(scale_to(255, 0), 0);
        assert_eq!(scale_to(100, 51), 20);
    }

    #[test]
    fn test_trim_to_u8() {
        assert_eq!(trim_to_u8(0), 0);
        assert_eq!(trim_to_u8(1023), 255);
        assert_eq!(trim_to_u8(512), 127);
        assert_eq!(trim_to_u8(4095), 255);
    }

    #[test]
    fn test_trim_to_range() {
        assert_eq!(trim_to_range(0, 5, 100), 5);
        assert_eq!(trim_to_range(1023, 5, 100), 100);
        assert_eq!(trim_to_range(2000, 5, 100), 100);
    }

    #[test]
    fn test_ease_toward() {
        assert_eq!(ease_toward(0, 100, 5), 20);
        assert_eq!(ease_toward(100, 0, 5), 80);
        assert_eq!(ease_toward(200, 255, 10), 205);
        assert_eq!(ease_toward(42, 42, 10), 42);
    }

    #[test]
    fn test_random_in_bounds() {
        let mut rng = StdRand::seed(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2_000 {
            let value = random_in(&mut rng, 5, 20);
            assert!((5..=20).contains(&value));
            seen_low |= value == 5;
            seen_high |= value == 20;
        }
        assert!(seen_low && seen_high);

        assert_eq!(random_in(&mut rng, 9, 9), 9);
        assert_eq!(random_in(&mut rng, 9, 3), 9);
        for _ in 0..500 {
            let value = random_u8(&mut rng, 200, 255);
            assert!(value >= 200);
        }
    }
}
