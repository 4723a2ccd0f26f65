mod tests {
    use led_modes::ModeId;

    #[test]
    fn test_mode_id_from_raw() {
        assert_eq!(ModeId::from_raw(0), Some(ModeId::Off));
        assert_eq!(ModeId::from_raw(1), Some(ModeId::Static));
        assert_eq!(ModeId::from_raw(2), Some(ModeId::Blink));
        assert_eq!(ModeId::from_raw(3), Some(ModeId::Breath));
        assert_eq!(ModeId::from_raw(4), Some(ModeId::Chase));
        assert_eq!(ModeId::from_raw(5), Some(ModeId::PerLed));
        assert_eq!(ModeId::from_raw(6), None);
        assert_eq!(ModeId::from_raw(99), None);
    }

    #[test]
    fn test_mode_id_parse() {
        assert_eq!(ModeId::parse_from_str("off"), Some(ModeId::Off));
        assert_eq!(ModeId::parse_from_str("static"), Some(ModeId::Static));
        assert_eq!(ModeId::parse_from_str("blink"), Some(ModeId::Blink));
        assert_eq!(ModeId::parse_from_str("breath"), Some(ModeId::Breath));
        assert_eq!(ModeId::parse_from_str("chase"), Some(ModeId::Chase));
        assert_eq!(ModeId::parse_from_str("perled"), Some(ModeId::PerLed));
        assert_eq!(ModeId::parse_from_str("rainbow"), None);
    }

    #[test]
    fn test_mode_id_as_str_round_trips() {
        for raw in 0..ModeId::COUNT {
            let id = ModeId::from_raw(raw).unwrap();
            assert_eq!(ModeId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_mode_cycling_order_wraps() {
        let mut id = ModeId::Off;
        let expected = [
            ModeId::Static,
            ModeId::Blink,
            ModeId::Breath,
            ModeId::Chase,
            ModeId::PerLed,
            ModeId::Off,
        ];
        for step in expected {
            id = id.next();
            assert_eq!(id, step);
        }
    }
}
