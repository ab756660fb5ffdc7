use anyhow::Result;
use bookingapi_core::Context;
use bookingapi_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // The booking client imposes no timeout of its own, bound latency here.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("bookingapi-example/1.0")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let test_url = "http://dev-api.norsk-global.com/";
    println!("Testing HTTP client with GET {test_url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(test_url)
        .body(Bytes::new())?;

    match ctx.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            for (name, value) in resp.headers() {
                println!("  {name}: {value:?}");
            }
        }
        Err(e) => {
            eprintln!("Request failed ({:?}): {e}", e.kind());
        }
    }

    Ok(())
}
