use flate2::read::GzDecoder;
use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::{TcpListener, TcpStream};

use super::{Listener, serve};
use crate::h1::Limits;
use crate::http::StatusCode;
use crate::request::Request;
use crate::response::Response;
use crate::routing::Router;
use crate::service::from_fn;
use crate::storage::DirStorage;

async fn spawn_server(dir: &tempfile::TempDir) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new(DirStorage::new(dir.path()));
    tokio::spawn(serve(listener, router, Limits::default()));
    addr
}

async fn send(addr: std::net::SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serve_root() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(&dir).await;

    let res = send(addr, b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");

    let res = send(addr, b"GET /index.html HTTP/1.1\r\nHost: localhost:4221\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn test_serve_echo() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(&dir).await;

    let res = send(addr, b"GET /echo/abc HTTP/1.1\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc");

    let res = send(addr, b"GET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 12\r\n\r\nfoobar/1.2.3");
}

#[tokio::test]
async fn test_serve_echo_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(&dir).await;

    let res = send(addr, b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n").await;

    let head_end = res.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    let (head, body) = res.split_at(head_end);
    let head = std::str::from_utf8(head).unwrap();

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: text/plain\r\n"));
    assert!(head.contains("Content-Encoding: gzip\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", body.len())));

    let mut decoded = String::new();
    GzDecoder::new(body).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "abc");
}

#[tokio::test]
async fn test_serve_files() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(&dir).await;

    let res = send(addr, b"POST /files/foo.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\n12345").await;
    assert_eq!(res, b"HTTP/1.1 201 Created\r\nContent-Length: 0\r\n\r\n");

    let res = send(addr, b"GET /files/foo.txt HTTP/1.1\r\n\r\n").await;
    assert_eq!(
        res,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 5\r\n\r\n12345"
    );

    let res = send(addr, b"GET /files/missing HTTP/1.1\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");

    let res = send(addr, b"DELETE /files/foo.txt HTTP/1.1\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn test_serve_concurrent() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(&dir).await;

    // an idle connection does not block the others
    let mut idle = TcpStream::connect(addr).await.unwrap();
    idle.write_all(b"GET / HTTP/1.1\r\n").await.unwrap();

    let tasks = (0..8).map(|i| {
        tokio::spawn(async move {
            let req = format!("GET /echo/{i} HTTP/1.1\r\n\r\n");
            send(addr, req.as_bytes()).await
        })
    });

    for (i, task) in tasks.collect::<Vec<_>>().into_iter().enumerate() {
        let expected = format!("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 1\r\n\r\n{i}");
        assert_eq!(task.await.unwrap(), expected.as_bytes());
    }

    idle.write_all(b"\r\n").await.unwrap();
    let mut res = Vec::new();
    idle.read_to_end(&mut res).await.unwrap();
    assert_eq!(res, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn test_serve_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(&dir).await;

    let res = send(addr, b"GARBAGE\r\n\r\n").await;
    assert!(res.is_empty());

    // declared body above the limit is never read
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"POST /files/big HTTP/1.1\r\nContent-Length: 2097152\r\n\r\n")
        .await
        .unwrap();
    let mut res = Vec::new();
    match stream.read_to_end(&mut res).await {
        Ok(_) => assert!(res.is_empty()),
        Err(err) => assert_eq!(err.kind(), std::io::ErrorKind::ConnectionReset),
    }
    assert!(!dir.path().join("big").exists());

    // server is still accepting
    let res = send(addr, b"GET / HTTP/1.1\r\n\r\n").await;
    assert_eq!(res, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
}

#[cfg(unix)]
#[tokio::test]
async fn test_serve_unix() {
    use tokio::net::{UnixListener, UnixStream};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.sock");
    let listener = UnixListener::bind(&path).unwrap();
    tokio::spawn(serve(listener, Router::new(DirStorage::new(dir.path())), Limits::default()));

    let mut stream = UnixStream::connect(&path).await.unwrap();
    stream.write_all(b"GET /echo/unix HTTP/1.1\r\n\r\n").await.unwrap();
    let mut res = Vec::new();
    stream.read_to_end(&mut res).await.unwrap();
    assert_eq!(res, b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\nunix");
}

/// Listener yielding queued accept results, pending once the queue is empty.
#[derive(Clone, Default)]
struct QueueListener {
    queue: Arc<Mutex<VecDeque<io::Result<DuplexStream>>>>,
}

impl QueueListener {
    fn push(&self, result: io::Result<DuplexStream>) {
        self.queue.lock().unwrap().push_back(result);
    }

    fn remaining(&self) -> usize {
        self.queue.lock().unwrap().len()
    }
}

impl Listener for QueueListener {
    type Stream = DuplexStream;

    fn poll_accept(&self, _: &mut Context<'_>) -> Poll<io::Result<(DuplexStream, String)>> {
        match self.queue.lock().unwrap().pop_front() {
            Some(result) => Poll::Ready(result.map(|io| (io, String::from("duplex")))),
            None => Poll::Pending,
        }
    }
}

fn emfile() -> io::Error {
    io::Error::from_raw_os_error(24)
}

#[test]
fn test_accept_error_yields() {
    let listener = QueueListener::default();
    for _ in 0..3 {
        listener.push(Err(emfile()));
    }

    let service = from_fn(|_: Request| async { Response::from_status(StatusCode::OK) });
    let mut serve = std::pin::pin!(serve(listener.clone(), service, Limits::default()));
    let mut cx = Context::from_waker(Waker::noop());

    // one failed accept per poll
    assert!(serve.as_mut().poll(&mut cx).is_pending());
    assert_eq!(listener.remaining(), 2);
    assert!(serve.as_mut().poll(&mut cx).is_pending());
    assert_eq!(listener.remaining(), 1);
}

#[tokio::test]
async fn test_serve_after_accept_error() {
    let listener = QueueListener::default();
    let (mut client, server) = tokio::io::duplex(4096);
    listener.push(Err(emfile()));
    listener.push(Ok(server));

    let dir = tempfile::tempdir().unwrap();
    tokio::spawn(serve(listener.clone(), Router::new(DirStorage::new(dir.path())), Limits::default()));

    client.write_all(b"GET /echo/still-accepting HTTP/1.1\r\n\r\n").await.unwrap();
    let mut res = Vec::new();
    client.read_to_end(&mut res).await.unwrap();

    assert_eq!(
        res,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 15\r\n\r\nstill-accepting"
    );
    assert_eq!(listener.remaining(), 0);
}
