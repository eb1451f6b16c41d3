//! Canned HTTP/1.1 responders for exercising the metadata endpoint and the
//! S3 wire calls without leaving the process.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

pub struct CannedServer {
    port: u16,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl CannedServer {
    /// Answers every request with the same raw `response`.
    pub async fn start(response: String) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let hits = Arc::new(AtomicUsize::new(0));
        let response = Arc::new(response);

        let task = {
            let hits = hits.clone();
            tokio::spawn(async move {
                loop {
                    let Ok((socket, _)) = listener.accept().await else {
                        return;
                    };
                    let hits = hits.clone();
                    let response = response.clone();
                    tokio::spawn(async move { serve(socket, &response, &hits).await });
                }
            })
        };

        Self { port, hits, task }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(mut socket: TcpStream, response: &str, hits: &AtomicUsize) {
    if read_request_head(&mut socket).await {
        hits.fetch_add(1, Ordering::SeqCst);
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.flush().await;
        let _ = socket.shutdown().await;
    }
}

/// Reads until the blank line closing the request head. GET and HEAD carry
/// no body so that is the whole request.
async fn read_request_head(socket: &mut TcpStream) -> bool {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return false,
            Ok(n) => {
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    return true;
                }
            }
        }
    }
}

/// Builds a `Connection: close` response. `Content-Length` is derived from
/// the body unless given in `headers`.
pub fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut lines = vec![
        format!("HTTP/1.1 {status}"),
        "Connection: close".to_string(),
    ];
    let header_lines = headers
        .iter()
        .map(|(name, value)| format!("{name}: {value}"));
    lines.extend(header_lines);

    let has_length = headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-length"));
    if !has_length {
        lines.push(format!("Content-Length: {}", body.len()));
    }
    format!("{}\r\n\r\n{body}", lines.join("\r\n"))
}

/// A port nothing listens on.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    listener.local_addr().unwrap().port()
}
