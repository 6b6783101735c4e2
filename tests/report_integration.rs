use std::process::Command;

use cotacoes_tui::{
    AwesomeQuoteService, QuoteSnapshot, QuoteSource, app::App, report::run_report,
};
use tracing::info;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUOTES_PATH: &str = "/json/last/USD-BRL,EUR-BRL,BTC-BRL";

const MOCK_JSON: &str = r#"{
    "USDBRL": { "code": "USD", "codein": "BRL", "bid": "5234.567" },
    "EURBRL": { "code": "EUR", "codein": "BRL", "bid": "5.6789" },
    "BTCBRL": { "code": "BTC", "codein": "BRL", "bid": "300000.00" }
}"#;

async fn create_mock_server(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(QUOTES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;

    mock_server
}

#[test_log::test(tokio::test)]
async fn test_report_against_mock_api() {
    let mock_server = create_mock_server(200, MOCK_JSON).await;
    let service = AwesomeQuoteService::new(&mock_server.uri());
    let mut out = Vec::new();

    run_report(&service, &mut out).await.unwrap();

    let report = String::from_utf8(out).unwrap();
    info!(%report, "Rendered report");
    assert_eq!(
        report,
        "Cotações Atuais:\n\
         ═══════════════════════\n\
         Dólar:   R$ 5,234.57\n\
         Euro:    R$ 5.68\n\
         Bitcoin: R$ 300,000.00\n\
         ═══════════════════════\n"
    );
}

#[test_log::test(tokio::test)]
async fn test_report_writes_nothing_when_api_fails() {
    let mock_server = create_mock_server(200, r#"{ "USDBRL": { "bid": "5.0" } }"#).await;
    let service = AwesomeQuoteService::new(&mock_server.uri());
    let mut out = Vec::new();

    let result = run_report(&service, &mut out).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_display_shows_fetched_values() {
    let mock_server = create_mock_server(200, MOCK_JSON).await;
    let service = AwesomeQuoteService::new(&mock_server.uri());
    let expected = service.fetch_snapshot().await.unwrap();
    assert_eq!(expected, QuoteSnapshot::new(5234.567, 5.6789, 300000.00));

    let mut app = App::new(service, std::time::Duration::from_secs(60));
    app.tick(std::time::Instant::now()).await;

    assert_eq!(
        app.display().field_texts(),
        vec![
            "Dólar: R$ 5,234.57",
            "Euro: R$ 5.68",
            "Bitcoin: R$ 300,000.00"
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_report_binary_exits_non_zero_on_connection_error() {
    // Nothing listens on the discard port.
    let output = tokio::task::spawn_blocking(|| {
        Command::new(env!("CARGO_BIN_EXE_cotacoes-report"))
            .args(["--base-url", "http://127.0.0.1:9"])
            .env_remove("QUOTES_BASE_URL")
            .output()
    })
    .await
    .unwrap()
    .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to fetch quotes"));
}

#[test_log::test(tokio::test)]
async fn test_report_binary_prints_report() {
    let mock_server = create_mock_server(200, MOCK_JSON).await;
    let uri = mock_server.uri();

    let output = tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_cotacoes-report"))
            .args(["--base-url", &uri])
            .output()
    })
    .await
    .unwrap()
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Cotações Atuais:\n"));
    assert!(stdout.contains("Bitcoin: R$ 300,000.00\n"));
}
