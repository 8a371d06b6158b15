//! Tests for TOML configuration parsing.

use std::path::PathBuf;

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [driver]
            library = 'C:\vpn\wintun.dll'

            [adapter]
            name = "MyVpn"
            tunnel_type = "WireGuard"
            guid = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.driver.library,
            Some(PathBuf::from(r"C:\vpn\wintun.dll"))
        );
        assert_eq!(config.adapter.name.as_deref(), Some("MyVpn"));
        assert_eq!(config.adapter.tunnel_type.as_deref(), Some("WireGuard"));
        assert_eq!(
            config.adapter.guid.as_deref(),
            Some("{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}")
        );
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.driver.library.is_none());
        assert!(config.adapter.name.is_none());
        assert!(config.adapter.tunnel_type.is_none());
        assert!(config.adapter.guid.is_none());
    }

    #[test]
    fn parse_partial_section() {
        let toml = r#"
            [adapter]
            name = "MyVpn"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.adapter.name.as_deref(), Some("MyVpn"));
        assert!(config.driver.library.is_none());
    }

    #[test]
    fn reject_unknown_section() {
        let toml = r#"
            [session]
            ring_capacity = 4194304
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_unknown_field() {
        let toml = r#"
            [adapter]
            nmae = "typo"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_invalid_syntax() {
        assert!(TomlConfig::parse("[adapter").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.driver.library, Some(PathBuf::from("wintun.dll")));
        assert_eq!(config.adapter.tunnel_type.as_deref(), Some("Wintun"));
        assert!(config.adapter.name.is_none());
        assert!(config.adapter.guid.is_none());
    }

    #[test]
    fn default_template_documents_all_options() {
        let template = default_config_template();

        assert!(template.contains("library"));
        assert!(template.contains("name"));
        assert!(template.contains("tunnel_type"));
        assert!(template.contains("guid"));
    }
}
