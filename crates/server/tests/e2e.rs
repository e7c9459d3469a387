use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use configs::AppConfig;
use server::startup::build_app;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = build_app(&AppConfig::default());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_people_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let people = format!("{}/api/people", app.base_url);

    let res = c.post(&people)
        .json(&json!({"person_id": "Simpson", "fname": "Homer"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let list = c.get(&people).send().await?.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 4);
    assert_eq!(list[3]["person_id"], "Simpson");

    let res = c.put(format!("{people}/Simpson"))
        .json(&json!({"fname": "Bart"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["fname"], "Bart");

    let res = c.delete(format!("{people}/Simpson")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Simpson successfully deleted");

    let res = c.get(format!("{people}/Simpson")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
