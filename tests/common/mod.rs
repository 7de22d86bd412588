use std::fs::File;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;

/// Creates the canonical test tree: `a.png` (10 bytes) at the root and
/// `b/c.png` (20 bytes) one level down.
pub fn create_test_tree(temp_dir: &Path) -> (PathBuf, PathBuf) {
    let a = temp_dir.join("a.png");
    let subdir = temp_dir.join("b");
    std::fs::create_dir(&subdir).unwrap();
    let c = subdir.join("c.png");

    File::create(&a).unwrap().write_all(&[0xAAu8; 10]).unwrap();
    File::create(&c).unwrap().write_all(&[0xBBu8; 20]).unwrap();

    (a, c)
}

/// Minimal stand-in for the compression service, good enough for the
/// HTTP/1.1 requests reqwest issues. POSTs to any path are answered with
/// `{"output":{"url":"http://<addr>/download"}}`; GET /download returns
/// `compressed` verbatim. One thread per connection, so concurrent tasks
/// are served concurrently.
pub struct MockShrinkService {
    addr: SocketAddr,
}

impl MockShrinkService {
    pub fn start(compressed: &'static [u8]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                thread::spawn(move || handle_connection(stream, addr, compressed));
            }
        });

        Self { addr }
    }

    pub fn shrink_url(&self) -> String {
        format!("http://{}/shrink", self.addr)
    }
}

fn handle_connection(mut stream: TcpStream, addr: SocketAddr, compressed: &[u8]) {
    let Some((request_line, body_len_known)) = read_request(&mut stream) else {
        return;
    };

    let response_body: Vec<u8> = if request_line.starts_with("GET /download") {
        compressed.to_vec()
    } else if request_line.starts_with("POST ") && body_len_known {
        format!(r#"{{"output":{{"url":"http://{}/download"}}}}"#, addr).into_bytes()
    } else {
        let _ = stream.write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n");
        return;
    };

    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response_body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response_body);
}

/// Reads one request, draining exactly Content-Length body bytes so the
/// client never sees a reset mid-upload. Returns the request line and
/// whether the declared body was fully received.
fn read_request(stream: &mut TcpStream) -> Option<(String, bool)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        match find_header_end(&buf) {
            Some(pos) => break pos,
            None => {
                let n = stream.read(&mut chunk).ok()?;
                if n == 0 {
                    return None;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let request_line = head.lines().next()?.to_string();

    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let mut body_received = buf.len() - (header_end + 4);
    while body_received < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return Some((request_line, false));
        }
        body_received += n;
    }

    Some((request_line, true))
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
