//! `HttpPlayer` against a one-shot HTTP server on a background thread.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use mixtape_player::{HttpPlayer, Player, PlayerError};

/// What the server saw: request line, lower-cased header lines, body.
#[derive(Debug)]
struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Captured {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Accept exactly one request, answer with `status`, and report it.
fn serve_once(status: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}/alerts", listener.local_addr().expect("addr"));
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("header line");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((k, v)) = line.split_once(':') {
                headers.push((k.trim().to_ascii_lowercase(), v.trim().to_string()));
            }
        }

        let length: usize = headers
            .iter()
            .find(|(k, _)| k == "content-length")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(0);
        let mut body = vec![0u8; length];
        reader.read_exact(&mut body).expect("body");

        let mut stream = stream;
        write!(stream, "HTTP/1.1 {status}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok")
            .expect("respond");

        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).expect("utf8 body"),
        })
        .expect("send");
    });

    (url, rx)
}

#[test]
fn posts_rendered_text_as_json() {
    let (url, rx) = serve_once("200 OK");
    let mut player = HttpPlayer::new(url);
    let body = r#"{"Version": "2.D.V04", "ID": "abc"}"#;

    player.play(body).expect("delivered");

    let seen = rx.recv().expect("request captured");
    assert_eq!(seen.request_line, "POST /alerts HTTP/1.1");
    assert_eq!(seen.header("content-type"), Some("application/json"));
    assert_eq!(seen.header("authorization"), None);
    assert_eq!(seen.body, body);
}

#[test]
fn sends_basic_auth_when_both_credentials_are_set() {
    let (url, rx) = serve_once("201 Created");
    let mut player = HttpPlayer::new(url)
        .with_credentials(Some("Aladdin".into()), Some("open sesame".into()));

    player.play("{}").expect("delivered");

    let seen = rx.recv().expect("request captured");
    assert_eq!(seen.header("authorization"), Some("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="));
}

#[test]
fn omits_auth_with_only_a_user() {
    let (url, rx) = serve_once("200 OK");
    let mut player = HttpPlayer::new(url).with_credentials(Some("user".into()), None);

    player.play("{}").expect("delivered");

    let seen = rx.recv().expect("request captured");
    assert_eq!(seen.header("authorization"), None);
}

#[test]
fn error_status_still_counts_as_delivered() {
    let (url, rx) = serve_once("500 Internal Server Error");
    let mut player = HttpPlayer::new(url);

    player.play("{}").expect("status codes are not validated");
    rx.recv().expect("request captured");
}

#[test]
fn connection_refused_is_a_delivery_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let mut player = HttpPlayer::new(format!("http://127.0.0.1:{port}/"));

    let err = player.play("{}").unwrap_err();
    assert!(matches!(err, PlayerError::Delivery { .. }), "got: {err}");
    assert!(err.to_string().contains(&port.to_string()), "url must be in message: {err}");
}
