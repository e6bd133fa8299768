mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use pwm_dimmer::channel::QueueFull;
    use pwm_dimmer::gesture::GESTURE_QUEUE_SIZE;
    use pwm_dimmer::{ButtonGestures, GestureChannel, GestureEvent, GestureSource, GestureTimings};

    use crate::common::TestButton;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn decoder() -> (TestButton, ButtonGestures<TestButton>) {
        let button = TestButton::default();
        let gestures = ButtonGestures::new(button.clone(), GestureTimings::default());
        (button, gestures)
    }

    #[test]
    fn test_single_click_fires_after_window() {
        let (button, mut gestures) = decoder();
        button.press();
        assert_eq!(gestures.poll(at(0)), None);
        button.release();
        assert_eq!(gestures.poll(at(100)), None);
        assert_eq!(gestures.poll(at(300)), None);
        assert_eq!(gestures.poll(at(500)), Some(GestureEvent::Click));
        assert_eq!(gestures.poll(at(600)), None);
    }

    #[test]
    fn test_double_click() {
        let (button, mut gestures) = decoder();
        button.press();
        assert_eq!(gestures.poll(at(0)), None);
        button.release();
        assert_eq!(gestures.poll(at(100)), None);
        button.press();
        assert_eq!(gestures.poll(at(200)), None);
        button.release();
        assert_eq!(gestures.poll(at(300)), Some(GestureEvent::DoubleClick));
        assert_eq!(gestures.poll(at(1_000)), None);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let (button, mut gestures) = decoder();
        button.press();
        assert_eq!(gestures.poll(at(0)), None);
        button.release();
        assert_eq!(gestures.poll(at(10)), None);
        assert_eq!(gestures.poll(at(1_000)), None);
    }

    #[test]
    fn test_long_press_sequence() {
        let (button, mut gestures) = decoder();
        button.press();
        assert_eq!(gestures.poll(at(0)), None);
        assert_eq!(gestures.poll(at(500)), None);
        assert_eq!(gestures.poll(at(800)), Some(GestureEvent::LongPressStart));
        assert_eq!(gestures.poll(at(850)), None);
        assert_eq!(gestures.poll(at(900)), Some(GestureEvent::LongPressTick));
        assert_eq!(gestures.poll(at(950)), None);
        assert_eq!(gestures.poll(at(1_000)), Some(GestureEvent::LongPressTick));
        button.release();
        assert_eq!(gestures.poll(at(1_020)), Some(GestureEvent::LongPressEnd));
        assert_eq!(gestures.poll(at(2_000)), None);
    }

    #[test]
    fn test_custom_timings() {
        let button = TestButton::default();
        let timings = GestureTimings {
            long_press: Duration::from_millis(300),
            ..GestureTimings::default()
        };
        let mut gestures = ButtonGestures::new(button.clone(), timings);
        button.press();
        assert_eq!(gestures.poll(at(0)), None);
        assert_eq!(gestures.poll(at(300)), Some(GestureEvent::LongPressStart));
    }

    #[test]
    fn test_active_high_button() {
        let button = TestButton::default();
        let mut gestures =
            ButtonGestures::new(button.clone(), GestureTimings::default()).with_active_high();
        // Level is high while the test button is released
        assert_eq!(gestures.poll(at(0)), None);
        assert_eq!(gestures.poll(at(800)), Some(GestureEvent::LongPressStart));
        button.press();
        assert_eq!(gestures.poll(at(900)), Some(GestureEvent::LongPressEnd));
    }

    #[test]
    fn test_channel_delivers_in_order() {
        let channel = GestureChannel::new();
        let sender = channel.sender();
        let mut receiver = channel.receiver();

        sender.try_send(GestureEvent::LongPressStart).unwrap();
        sender.try_send(GestureEvent::LongPressTick).unwrap();
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.poll(at(0)), Some(GestureEvent::LongPressStart));
        assert_eq!(receiver.poll(at(0)), Some(GestureEvent::LongPressTick));
        assert_eq!(receiver.poll(at(0)), None);
    }

    #[test]
    fn test_channel_rejects_when_full() {
        let channel = GestureChannel::new();
        for _ in 0..GESTURE_QUEUE_SIZE {
            channel.try_send(GestureEvent::Click).unwrap();
        }
        assert_eq!(
            channel.try_send(GestureEvent::DoubleClick),
            Err(QueueFull(GestureEvent::DoubleClick))
        );
    }
}
