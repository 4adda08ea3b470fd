mod tests {
    use myrtio_blade::profile::{LEGACY_PROFILES, PROFILE_TABLE_LEN, SAVI_PROFILES};
    use myrtio_blade::{BladeColor, HiltCommand, HiltFamily, UnknownCommand, lookup};

    #[test]
    fn test_parse_profile_commands() {
        assert_eq!(
            HiltCommand::from_raw(0x23),
            Ok(HiltCommand::Ignite {
                family: HiltFamily::Savi,
                profile: 3
            })
        );
        assert_eq!(
            HiltCommand::from_raw(0x3A),
            Ok(HiltCommand::Ignite {
                family: HiltFamily::Legacy,
                profile: 10
            })
        );
        assert_eq!(
            HiltCommand::from_raw(0xA0),
            Ok(HiltCommand::SetColor {
                family: HiltFamily::Savi,
                profile: 0
            })
        );
        assert_eq!(
            HiltCommand::from_raw(0xBF),
            Ok(HiltCommand::SetColor {
                family: HiltFamily::Legacy,
                profile: 15
            })
        );
    }

    #[test]
    fn test_parse_shared_code_points() {
        for raw in [0x40, 0x4F, 0x50, 0x5A] {
            assert_eq!(HiltCommand::from_raw(raw), Ok(HiltCommand::Extinguish));
        }
        for raw in [0x80, 0x91, 0xE2, 0xFF] {
            assert_eq!(HiltCommand::from_raw(raw), Ok(HiltCommand::Off));
        }
        for raw in [0xC0, 0xC7, 0xD0, 0xDF] {
            assert_eq!(HiltCommand::from_raw(raw), Ok(HiltCommand::Clash));
        }
        assert_eq!(HiltCommand::from_raw(0x6F), Ok(HiltCommand::FlickerLow(15)));
        assert_eq!(HiltCommand::from_raw(0x73), Ok(HiltCommand::FlickerHigh(3)));
    }

    #[test]
    fn test_unknown_commands() {
        for raw in [0x00, 0x01, 0x0F, 0x10, 0x1F] {
            assert_eq!(HiltCommand::from_raw(raw), Err(UnknownCommand(raw)));
            assert!(HiltCommand::try_from(raw).is_err());
        }
    }

    #[test]
    fn test_to_raw() {
        assert_eq!(HiltCommand::Extinguish.to_raw(), 0x40);
        assert_eq!(HiltCommand::Off.to_raw(), 0x80);
        assert_eq!(HiltCommand::Clash.to_raw(), 0xC0);
        assert_eq!(HiltCommand::FlickerHigh(9).to_raw(), 0x79);
        for raw in (0x20..=0x3F).chain(0xA0..=0xBF).chain(0x60..=0x7F) {
            let command = HiltCommand::from_raw(raw).unwrap();
            assert_eq!(command.to_raw(), raw);
        }
    }

    #[test]
    fn test_profile_lookup() {
        assert_eq!(lookup(HiltFamily::Savi, 0).color, BladeColor::White);
        assert_eq!(lookup(HiltFamily::Savi, 1).color, BladeColor::Red);
        assert_eq!(lookup(HiltFamily::Legacy, 6).color, BladeColor::Green);
        assert_eq!(lookup(HiltFamily::Legacy, 10).color, BladeColor::OrangeRed);
        assert_eq!(lookup(HiltFamily::Savi, 0).ignition_time.as_millis(), 280);
        assert_eq!(lookup(HiltFamily::Savi, 0).extinguish_delay.as_millis(), 370);
        assert_eq!(lookup(HiltFamily::Savi, 0).extinguish_time.as_millis(), 470);
    }

    #[test]
    fn test_profile_lookup_wraps() {
        assert!(core::ptr::eq(lookup(HiltFamily::Savi, 17), &SAVI_PROFILES[1]));
        assert!(core::ptr::eq(
            lookup(HiltFamily::Legacy, 255),
            &LEGACY_PROFILES[PROFILE_TABLE_LEN - 1]
        ));
    }
}
