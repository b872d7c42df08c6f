//! Test fixtures shared by the pipeline, registry and server tests.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::executor::RequestExecutor;
use super::outcome::{RawResponse, TransportFailure};
use super::request::ApiRequest;

/// Executor that records requests and replays a canned result.
pub struct MockExecutor {
    result: Result<RawResponse, TransportFailure>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockExecutor {
    pub fn new(result: Result<RawResponse, TransportFailure>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(status: u16, body: &str) -> Self {
        Self::new(Ok(RawResponse::new(status, body)))
    }

    pub fn failing(failure: TransportFailure) -> Self {
        Self::new(Err(failure))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl RequestExecutor for MockExecutor {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportFailure> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

/// Executor that panics on every call.
pub struct PanickingExecutor;

impl RequestExecutor for PanickingExecutor {
    fn execute(&self, _request: &ApiRequest) -> Result<RawResponse, TransportFailure> {
        panic!("boom")
    }
}

/// Local HTTP listener answering a fixed number of requests.
pub struct HttpFixture {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl HttpFixture {
    /// Raw head of every request received, in arrival order.
    pub fn requests(self) -> Vec<String> {
        self.handle.join().unwrap()
    }

    /// Raw head of the single request received.
    pub fn request(self) -> String {
        self.requests().remove(0)
    }
}

/// Serve `times` requests with the same response.
pub fn serve(times: usize, status: u16, content_type: &str, body: &str) -> HttpFixture {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {} Fixture\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        (0..times)
            .map(|_| {
                let (mut stream, _) = listener.accept().unwrap();
                let head = read_head(&stream);
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
                head
            })
            .collect()
    });

    HttpFixture { base_url, handle }
}

pub fn serve_once(status: u16, content_type: &str, body: &str) -> HttpFixture {
    serve(1, status, content_type, body)
}

/// Listener that accepts one connection and never answers.
pub fn silent_server() -> HttpFixture {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let accepted = listener.accept();
        thread::sleep(Duration::from_secs(3));
        drop(accepted);
        Vec::new()
    });

    HttpFixture { base_url, handle }
}

/// Base URL of a port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn read_head(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
            break;
        }
        head.push_str(&line);
    }
    head
}
