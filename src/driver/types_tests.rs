//! Tests for GUID, LUID and driver version types.

use std::num::NonZeroU32;

use super::types::{DriverVersion, Guid, Luid};

mod guid {
    use super::*;

    const SAMPLE: Guid = Guid::from_fields(
        0x6ba7_b810,
        0x9dad,
        0x11d1,
        [0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8],
    );

    #[test]
    fn layout_matches_win32_guid() {
        assert_eq!(std::mem::size_of::<Guid>(), 16);
        assert_eq!(std::mem::align_of::<Guid>(), 4);
    }

    #[test]
    fn parse_braced() {
        let guid: Guid = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse().unwrap();
        assert_eq!(guid, SAMPLE);
    }

    #[test]
    fn parse_unbraced_lowercase() {
        let guid: Guid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap();
        assert_eq!(guid, SAMPLE);
    }

    #[test]
    fn display_is_braced_uppercase() {
        assert_eq!(SAMPLE.to_string(), "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}");
    }

    #[test]
    fn u128_matches_textual_order() {
        assert_eq!(SAMPLE.to_u128(), 0x6ba7_b810_9dad_11d1_80b4_00c0_4fd4_30c8);
        assert_eq!(Guid::from_u128(SAMPLE.to_u128()), SAMPLE);
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!("{6BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse::<Guid>().is_err());
        assert!("6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Guid>().is_err());
    }

    #[test]
    fn rejects_wrong_group_lengths() {
        assert!("6BA7B81-09DAD-11D1-80B4-00C04FD430C8".parse::<Guid>().is_err());
        assert!("6BA7B81009DAD11D180B400C04FD430C8".parse::<Guid>().is_err());
    }

    #[test]
    fn rejects_non_hex_and_sign() {
        assert!("6BA7B81G-9DAD-11D1-80B4-00C04FD430C8".parse::<Guid>().is_err());
        assert!("+BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse::<Guid>().is_err());
    }

    #[test]
    fn parse_error_carries_input() {
        let error = "bogus".parse::<Guid>().unwrap_err();
        assert_eq!(error.value, "bogus");
    }
}

mod luid {
    use super::*;

    #[test]
    fn display_is_padded_hex() {
        assert_eq!(Luid::new(0x0006_0000_0000_0001).to_string(), "0x0006000000000001");
    }

    #[test]
    fn value_round_trips() {
        assert_eq!(Luid::new(42).value(), 42);
    }
}

mod driver_version {
    use super::*;

    #[test]
    fn decodes_major_minor() {
        let version = DriverVersion::new(NonZeroU32::new(0x0000_000e).unwrap());
        assert_eq!(version.major(), 0);
        assert_eq!(version.minor(), 14);
        assert_eq!(version.to_string(), "0.14");

        let version = DriverVersion::new(NonZeroU32::new(0x0001_0002).unwrap());
        assert_eq!(version.to_string(), "1.2");
    }

    #[test]
    fn raw_value_is_preserved() {
        let version = DriverVersion::new(NonZeroU32::new(0xdead_beef).unwrap());
        assert_eq!(version.raw(), 0xdead_beef);
    }
}
