mod tests {
    use embassy_time::{Duration, Instant};
    use led_modes::{Debouncer, Edge};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_chatter_within_window_produces_no_edge() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        // 30 ms of bouncing around a transition
        assert_eq!(debouncer.sample(true, at(10)), None);
        assert_eq!(debouncer.sample(false, at(20)), None);
        assert_eq!(debouncer.sample(true, at(30)), None);
        assert_eq!(debouncer.sample(false, at(40)), None);
        assert_eq!(debouncer.sample(false, at(100)), None);
        assert_eq!(debouncer.stable(), false);
    }

    #[test]
    fn test_stable_transition_produces_exactly_one_edge() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        assert_eq!(debouncer.sample(true, at(100)), None);
        assert_eq!(debouncer.sample(true, at(130)), None);
        assert_eq!(debouncer.sample(true, at(151)), Some(Edge::Rising));
        assert_eq!(debouncer.stable(), true);

        // Held longer: no repeated edge
        assert_eq!(debouncer.sample(true, at(300)), None);
        assert_eq!(debouncer.sample(true, at(1000)), None);
    }

    #[test]
    fn test_release_produces_falling_edge() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        debouncer.sample(true, at(0));
        assert_eq!(debouncer.sample(true, at(51)), Some(Edge::Rising));

        assert_eq!(debouncer.sample(false, at(200)), None);
        assert_eq!(debouncer.sample(false, at(251)), Some(Edge::Falling));
        assert_eq!(debouncer.stable(), false);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        debouncer.sample(true, at(0));
        // Exactly the window: not yet accepted
        assert_eq!(debouncer.sample(true, at(50)), None);
        assert_eq!(debouncer.sample(true, at(51)), Some(Edge::Rising));
    }

    #[test]
    fn test_bounce_restarts_settle_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        debouncer.sample(true, at(0));
        debouncer.sample(false, at(40));
        debouncer.sample(true, at(45));
        // 45 + 50 has not elapsed yet
        assert_eq!(debouncer.sample(true, at(90)), None);
        assert_eq!(debouncer.sample(true, at(96)), Some(Edge::Rising));
    }
}
