//! One GET and one POST against httpbin.org, printing status, body length
//! and a short body preview. Exits non-zero on any client error.

use httpc_core::{HttpClient, HttpError, Options};

fn preview(body: &[u8]) -> String {
    let end = body.len().min(200);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

fn run() -> Result<(), HttpError> {
    let options = Options {
        timeout_ms: 10_000,
        user_agent: Some("httpc-demo/1.0".to_string()),
        ..Options::default()
    };
    let mut client = HttpClient::with_options(options)?;

    let resp = client.get(
        "https://httpbin.org/get",
        &[("Accept".to_string(), "application/json".to_string())],
    )?;
    println!("[GET] status: {}", resp.status);
    println!("[GET] body length: {} bytes", resp.body.len());
    println!("[GET] body preview: {}", preview(&resp.body));
    println!();

    let payload = br#"{"tool":"httpc","action":"demo"}"#;
    let resp = client.post(
        "https://httpbin.org/post",
        payload,
        &[("Content-Type".to_string(), "application/json".to_string())],
    )?;
    println!("[POST] status: {}", resp.status);
    println!("[POST] body length: {} bytes", resp.body.len());
    println!("[POST] body preview: {}", preview(&resp.body));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        match err {
            HttpError::Init(_) => eprintln!("init error: {err}"),
            HttpError::Transport(_) => eprintln!("transport error: {err}"),
        }
        std::process::exit(1);
    }
}
