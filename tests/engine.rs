mod tests {
    use embassy_time::Instant;
    use led_modes::{Engine, ModeId};

    const LED_COUNT: usize = 3;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn engine(initial: ModeId) -> Engine<LED_COUNT> {
        Engine::new(initial)
    }

    #[test]
    fn test_static_entry_renders_ceiling() {
        let engine = engine(ModeId::Static);
        assert_eq!(engine.frame(), &[200, 200, 200]);
    }

    #[test]
    fn test_off_holds_dark() {
        let mut engine = engine(ModeId::Off);
        assert_eq!(engine.frame(), &[0, 0, 0]);
        engine.tick(at(5000));
        assert_eq!(engine.frame(), &[0, 0, 0]);
    }

    #[test]
    fn test_static_tracks_brightness_on_next_tick() {
        let mut engine = engine(ModeId::Static);
        engine.params_mut().set_brightness(50);
        engine.tick(at(1));
        assert_eq!(engine.frame(), &[50, 50, 50]);
    }

    #[test]
    fn test_blink_flips_exactly_once_per_interval() {
        let mut engine = engine(ModeId::Blink);
        assert_eq!(engine.frame(), &[0, 0, 0]);

        // Tick every millisecond; the default interval is 500 ms, so
        // 2000 ms of elapsed time must produce exactly 4 toggles no
        // matter the tick granularity.
        let mut toggles = 0;
        let mut last = engine.frame()[0];
        for ms in 1..=2000 {
            let frame = engine.tick(at(ms));
            if frame[0] != last {
                toggles += 1;
                last = frame[0];
            }
        }
        assert_eq!(toggles, 4);
    }

    #[test]
    fn test_blink_uses_configured_ceiling() {
        let mut engine = engine(ModeId::Blink);
        engine.params_mut().set_brightness(80);
        engine.tick(at(500));
        assert_eq!(engine.frame(), &[80, 80, 80]);
        engine.tick(at(1000));
        assert_eq!(engine.frame(), &[0, 0, 0]);
    }

    #[test]
    fn test_breath_envelope_min_and_max() {
        let mut engine = engine(ModeId::Breath);

        // Cycle starts at the minimum, peaks at half period (2000 ms).
        engine.tick(at(0));
        assert_eq!(engine.frame()[0], 0);

        engine.tick(at(1000));
        assert_eq!(engine.frame()[0], 200);

        engine.tick(at(500));
        let mid = engine.frame()[0];
        assert!((99..=101).contains(&mid), "midpoint was {mid}");
    }

    #[test]
    fn test_breath_is_periodic() {
        let mut engine = engine(ModeId::Breath);
        engine.tick(at(700));
        let first = engine.frame()[0];
        engine.tick(at(700 + 2000));
        assert_eq!(engine.frame()[0], first);
        engine.tick(at(700 + 4000));
        assert_eq!(engine.frame()[0], first);
    }

    #[test]
    fn test_chase_advances_one_step_per_interval() {
        let mut engine = engine(ModeId::Chase);
        // Dark until the first advance fires
        assert_eq!(engine.frame(), &[0, 0, 0]);

        engine.tick(at(150));
        assert_eq!(engine.frame(), &[0, 200, 0]);
        engine.tick(at(300));
        assert_eq!(engine.frame(), &[0, 0, 200]);
        engine.tick(at(450));
        assert_eq!(engine.frame(), &[200, 0, 0]);
    }

    #[test]
    fn test_chase_lights_exactly_one_channel() {
        let mut engine = engine(ModeId::Chase);
        engine.tick(at(150));
        for ms in (151..=3000).step_by(7) {
            let frame = engine.tick(at(ms));
            let lit = frame.iter().filter(|&&level| level != 0).count();
            assert_eq!(lit, 1, "at t={ms} frame was {frame:?}");
        }
    }

    #[test]
    fn test_per_led_channels_toggle_independently() {
        let mut engine = engine(ModeId::PerLed);

        // Defaults are 200/350/500 ms. Count per-channel toggles over
        // 2100 ms of 1 ms ticks; each count must match the elapsed time
        // divided by that channel's interval within one toggle.
        let mut toggles = [0u64; LED_COUNT];
        let mut last = *engine.frame();
        for ms in 1..=2100 {
            let frame = engine.tick(at(ms));
            for i in 0..LED_COUNT {
                if frame[i] != last[i] {
                    toggles[i] += 1;
                }
            }
            last = *frame;
        }

        let intervals = [200u64, 350, 500];
        for i in 0..LED_COUNT {
            let expected = 2100 / intervals[i];
            let diff = toggles[i].abs_diff(expected);
            assert!(
                diff <= 1,
                "channel {i}: {} toggles, expected about {expected}",
                toggles[i]
            );
        }
    }

    #[test]
    fn test_mode_reentry_resets_transient_state() {
        let mut engine = engine(ModeId::Blink);

        // Leave the blink mid-phase, then re-enter
        engine.tick(at(500));
        assert_eq!(engine.frame(), &[200, 200, 200]);
        engine.enter(ModeId::Blink, at(600));
        assert_eq!(engine.frame(), &[0, 0, 0]);

        // Entering again right away is observably identical
        engine.enter(ModeId::Blink, at(600));
        assert_eq!(engine.frame(), &[0, 0, 0]);

        // And the toggle clock restarted from entry time
        engine.tick(at(1099));
        assert_eq!(engine.frame(), &[0, 0, 0]);
        engine.tick(at(1100));
        assert_eq!(engine.frame(), &[200, 200, 200]);
    }

    #[test]
    fn test_switching_modes_rerenders_immediately() {
        let mut engine = engine(ModeId::Static);
        assert_eq!(engine.frame(), &[200, 200, 200]);

        engine.enter(ModeId::Off, at(100));
        assert_eq!(engine.frame(), &[0, 0, 0]);

        engine.enter(ModeId::Static, at(200));
        assert_eq!(engine.frame(), &[200, 200, 200]);
    }

    #[test]
    fn test_cycle_walks_all_modes() {
        let mut engine = engine(ModeId::Static);
        assert_eq!(engine.cycle(at(10)), ModeId::Blink);
        assert_eq!(engine.cycle(at(20)), ModeId::Breath);
        assert_eq!(engine.cycle(at(30)), ModeId::Chase);
        assert_eq!(engine.cycle(at(40)), ModeId::PerLed);
        assert_eq!(engine.cycle(at(50)), ModeId::Off);
        assert_eq!(engine.cycle(at(60)), ModeId::Static);
        assert_eq!(engine.mode_id(), ModeId::Static);
    }
}
