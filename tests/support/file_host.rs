//! Raw HTTP file host that paces or truncates the response body.
//!
//! wiremock writes a body in one piece, so streaming behavior is exercised
//! against this single-connection server instead.

#![allow(dead_code)]

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Body served by [`spawn_file_host`].
pub struct PacedBody {
    /// Chunks written one after another.
    pub chunks: Vec<Vec<u8>>,
    /// Pause before each chunk.
    pub delay: Duration,
    /// `Content-Length` announced in the header; larger than the chunks to
    /// close the connection mid-body.
    pub content_length: usize,
}

impl PacedBody {
    /// A complete body split into `chunk_count` chunks.
    pub fn steady(content: &[u8], chunk_count: usize, delay: Duration) -> Self {
        let chunk_size = content.len().div_ceil(chunk_count.max(1)).max(1);
        Self {
            chunks: content.chunks(chunk_size).map(<[u8]>::to_vec).collect(),
            delay,
            content_length: content.len(),
        }
    }
}

/// Serves `body` to the first connection and returns the host's base URL.
pub async fn spawn_file_host(body: PacedBody) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind file host");
    let addr = listener.local_addr().expect("file host address");
    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            serve(socket, body).await;
        }
    });
    format!("http://{addr}")
}

async fn serve(mut socket: TcpStream, body: PacedBody) {
    let mut request = Vec::new();
    let mut buf = [0_u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.content_length
    );
    if socket.write_all(head.as_bytes()).await.is_err() {
        return;
    }
    for chunk in body.chunks {
        tokio::time::sleep(body.delay).await;
        if socket.write_all(&chunk).await.is_err() || socket.flush().await.is_err() {
            return;
        }
    }
    let _ = socket.shutdown().await;
}
