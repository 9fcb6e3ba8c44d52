use crate::common;
use mockito::Matcher;
use salt_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_minion_grains() {
    let mut server = mockito::Server::new_async().await;
    let mock = common::mock_json(
        &mut server,
        "GET",
        "/minions/web1",
        r#"{"return": [{"web1": {"os": "Ubuntu", "os_family": "Debian", "fqdn": "web1.local"}}]}"#,
    )
    .await;

    let client = common::create_authenticated_client(&server).await;
    let minion = client.minion("web1").await.unwrap().expect("minion");

    assert_eq!(minion.id, "web1");
    assert_eq!(minion.os(), Some("Ubuntu"));
    assert_eq!(minion.os_family(), Some("Debian"));
    assert_eq!(minion.fqdn(), Some("web1.local"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_minion_that_did_not_return() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/minions/down1",
        r#"{"return": [{"down1": false}]}"#,
    )
    .await;

    let client = common::create_authenticated_client(&server).await;
    assert!(client.minion("down1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_minion() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(&mut server, "GET", "/minions/ghost", r#"{"return": [{}]}"#).await;

    let client = common::create_authenticated_client(&server).await;
    assert!(client.minion("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_minion_id_is_rejected() {
    let server = mockito::Server::new_async().await;
    let client = common::create_authenticated_client(&server).await;

    match client.minion(" ").await {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("minion id")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_minions_sorted_and_unresponsive_skipped() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/minions",
        r#"{"return": [{"web2": {"os": "Debian"}, "db1": {"os": "CentOS"}, "down1": false}]}"#,
    )
    .await;

    let client = common::create_authenticated_client(&server).await;
    let minions = client.minions().await.unwrap();

    let ids: Vec<&str> = minions.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["db1", "web2"]);
}

#[tokio::test]
async fn test_minions_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/minions")
        .with_status(401)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.minions().await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_submit_job() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/minions")
        .match_header("x-auth-token", "abc123")
        .match_body(Matcher::Json(json!({
            "tgt": "web*",
            "fun": "test.ping"
        })))
        .with_status(202)
        .with_body(r#"{"return": [{"jid": "20240115100000000000", "minions": ["web1", "web2"]}]}"#)
        .create_async()
        .await;

    let client = common::create_authenticated_client(&server).await;
    let job = client
        .submit_job(&JobRequest::new("web*", "test.ping"))
        .await
        .unwrap();

    assert_eq!(job.jid, "20240115100000000000");
    assert_eq!(job.minions, vec!["web1", "web2"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_job_without_matching_minions() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(&mut server, "POST", "/minions", r#"{"return": [{}]}"#).await;

    let client = common::create_authenticated_client(&server).await;
    match client.submit_job(&JobRequest::new("nomatch*", "test.ping")).await {
        Err(AppError::NoMinionsMatched(target)) => assert_eq!(target, "nomatch*"),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_job_with_empty_return() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(&mut server, "POST", "/minions", r#"{"return": []}"#).await;

    let client = common::create_authenticated_client(&server).await;
    assert!(matches!(
        client.submit_job(&JobRequest::new("web*", "test.ping")).await,
        Err(AppError::NoMinionsMatched(_))
    ));
}

#[tokio::test]
async fn test_jobs_sorted_by_jid() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/jobs",
        r#"{"return": [{
            "20240115100000000002": {"Function": "state.apply", "Target": "web*", "User": "saltdev"},
            "20240115100000000001": {"Function": "test.ping", "Target": "*", "User": "root"}
        }]}"#,
    )
    .await;

    let client = common::create_authenticated_client(&server).await;
    let jobs = client.jobs().await.unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].jid, "20240115100000000001");
    assert_eq!(jobs[0].function, "test.ping");
    assert_eq!(jobs[1].function, "state.apply");
}

#[tokio::test]
async fn test_job_details() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/jobs/20240115100000000001",
        r#"{
            "info": [{"jid": "20240115100000000001", "Function": "test.ping", "Minions": ["web1"]}],
            "return": [{"web1": true}]
        }"#,
    )
    .await;

    let client = common::create_authenticated_client(&server).await;
    let details = client.job("20240115100000000001").await.unwrap();

    assert_eq!(details.info.unwrap().function, "test.ping");
    assert_eq!(details.results["web1"], json!(true));
}

#[tokio::test]
async fn test_empty_jid_is_rejected() {
    let server = mockito::Server::new_async().await;
    let client = common::create_authenticated_client(&server).await;
    assert!(matches!(
        client.job("").await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_keys() {
    let mut server = mockito::Server::new_async().await;
    let _mock = common::mock_json(
        &mut server,
        "GET",
        "/keys",
        r#"{"return": {"local": ["master.pem", "master.pub"], "minions": ["web1"], "minions_pre": ["new1"], "minions_rejected": [], "minions_denied": []}}"#,
    )
    .await;

    let client = common::create_authenticated_client(&server).await;
    let keys = client.keys().await.unwrap();

    assert_eq!(keys.minions, vec!["web1"]);
    assert_eq!(keys.minions_pre, vec!["new1"]);
}

#[tokio::test]
async fn test_run_lowstate() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-auth-token", "abc123")
        .match_body(Matcher::Json(json!([
            {"client": "local", "tgt": "*", "fun": "test.ping"},
            {"client": "runner", "fun": "manage.up"}
        ])))
        .with_status(200)
        .with_body(r#"{"return": [{"web1": true, "web2": true}, ["web1", "web2"]]}"#)
        .create_async()
        .await;

    let client = common::create_authenticated_client(&server).await;
    let results = client
        .run(&[Lowstate::local("*", "test.ping"), Lowstate::runner("manage.up")])
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["web1"], json!(true));
    assert_eq!(results[1], json!(["web1", "web2"]));
    mock.assert_async().await;
}
