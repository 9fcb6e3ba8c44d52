use salt_client::config::Config;
use std::env;
use std::time::Duration;

#[test]
fn test_config_with_credentials() {
    let config = Config::with_credentials("https://master:8000", "admin", "secret", "ldap", true);

    assert_eq!(config.rest_api.base_url, "https://master:8000");
    assert!(config.rest_api.skip_verify);
    assert_eq!(config.rest_api.timeout, None);
    assert_eq!(config.rest_api.timeout_duration(), None);
    assert_eq!(config.credentials.username, "admin");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.credentials.eauth, "ldap");
}

#[test]
fn test_config_password_is_not_serialized() {
    let config = Config::with_credentials("https://master:8000", "admin", "secret", "pam", false);
    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains("admin"));
    assert!(!json.contains("secret"));
}

#[test]
fn test_timeout_duration() {
    let mut config = Config::with_credentials("http://master:8000", "a", "b", "pam", false);
    config.rest_api.timeout = Some(15);
    assert_eq!(config.rest_api.timeout_duration(), Some(Duration::from_secs(15)));
}

// The only test touching the SALT_* variables read by Config::new.
#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("SALT_API_URL", "https://salt.example.com:8000");
        env::set_var("SALT_USERNAME", "saltdev");
        env::set_var("SALT_PASSWORD", "saltdev");
        env::set_var("SALT_EAUTH", "auto");
        env::set_var("SALT_SKIP_VERIFY", "true");
        env::set_var("SALT_REST_TIMEOUT", "20");
    }

    let config = Config::new();

    unsafe {
        for var in [
            "SALT_API_URL",
            "SALT_USERNAME",
            "SALT_PASSWORD",
            "SALT_EAUTH",
            "SALT_SKIP_VERIFY",
            "SALT_REST_TIMEOUT",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.rest_api.base_url, "https://salt.example.com:8000");
    assert_eq!(config.credentials.username, "saltdev");
    assert_eq!(config.credentials.password, "saltdev");
    assert_eq!(config.credentials.eauth, "auto");
    assert!(config.rest_api.skip_verify);
    assert_eq!(config.rest_api.timeout, Some(20));
}
