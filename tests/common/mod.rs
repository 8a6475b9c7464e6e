use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serve canned JSON responses over local HTTP and return the base URL.
///
/// `route` maps a request path (query string included) and body to a status
/// code and response payload. Each connection carries one request; the
/// listener accepts until the test runtime shuts down.
pub async fn spawn_stub_api<F>(route: F) -> String
where
    F: Fn(&str, &str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    let route = Arc::new(route);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let route = Arc::clone(&route);
            tokio::spawn(async move {
                serve_one(stream, &*route).await;
            });
        }
    });

    format!("http://{addr}")
}

async fn serve_one<F>(mut stream: TcpStream, route: &F)
where
    F: Fn(&str, &str) -> (u16, String),
{
    let Some((path, body)) = read_request(&mut stream).await else {
        return;
    };

    let (status, payload) = route(&path, &body);
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {payload}",
        payload.len()
    );

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Read one HTTP/1.1 request: the target path plus the body, sized by the
/// content-length header.
async fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut raw: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&chunk[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while raw.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..n]);
    }

    let path = head.lines().next()?.split_whitespace().nth(1)?.to_string();
    let body = String::from_utf8_lossy(&raw[header_end..]).into_owned();
    Some((path, body))
}
