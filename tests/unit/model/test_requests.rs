use assert_json_diff::assert_json_eq;
use salt_client::config::Credentials;
use salt_client::model::requests::{JobRequest, LoginRequest, Lowstate, TargetType};
use serde_json::json;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn login_request_from_credentials() {
    let credentials = Credentials {
        username: "saltdev".to_string(),
        password: "saltdev".to_string(),
        eauth: "pam".to_string(),
    };

    let req = LoginRequest::from(&credentials);
    assert_json_eq!(
        json_value(&req),
        json!({"username": "saltdev", "password": "saltdev", "eauth": "pam"})
    );
}

#[test]
fn lowstate_local_omits_empty_fields() {
    let cmd = Lowstate::local("*", "test.ping");
    assert_json_eq!(
        json_value(&cmd),
        json!({"client": "local", "tgt": "*", "fun": "test.ping"})
    );
}

#[test]
fn lowstate_runner_has_no_target() {
    let cmd = Lowstate::runner("jobs.list_jobs");
    let v = json_value(&cmd);
    assert_eq!(v["client"], "runner");
    assert!(v.get("tgt").is_none());
}

#[test]
fn lowstate_builders() {
    let cmd = Lowstate::local_async("web*", "cmd.run")
        .with_arg("uptime")
        .with_kwarg("timeout", 5)
        .with_target_type(TargetType::Glob);

    assert_json_eq!(
        json_value(&cmd),
        json!({
            "client": "local_async",
            "tgt": "web*",
            "fun": "cmd.run",
            "arg": ["uptime"],
            "kwarg": {"timeout": 5},
            "tgt_type": "glob"
        })
    );
}

#[test]
fn wheel_lowstate() {
    let cmd = Lowstate::wheel("key.list_all");
    assert_eq!(cmd.client, "wheel");
    assert_eq!(cmd.tgt, None);
}

#[test]
fn target_type_serializes_snake_case() {
    assert_eq!(json_value(&TargetType::GrainPcre), json!("grain_pcre"));
    assert_eq!(json_value(&TargetType::Ipcidr), json!("ipcidr"));
    assert_eq!(json_value(&TargetType::default()), json!("glob"));
}

#[test]
fn job_request_builders() {
    let job = JobRequest::new("os:Debian", "pkg.version")
        .with_arg("openssl")
        .with_target_type(TargetType::Grain);

    assert_json_eq!(
        json_value(&job),
        json!({"tgt": "os:Debian", "fun": "pkg.version", "arg": ["openssl"], "tgt_type": "grain"})
    );
}
