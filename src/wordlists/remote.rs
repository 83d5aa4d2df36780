//! Remote word list
//!
//! Fetches a JSON array of words over HTTP.

use super::WordSourceError;
use log::info;
use reqwest::blocking::{Client, Response};

/// Word list endpoint used by `--words remote`
pub const DEFAULT_WORDS_URL: &str = "https://api.frontendexpert.io/api/fe/wordle-words";

/// Fetch candidate words from `url`
///
/// The response body must be a JSON array of strings. Words are returned as sent;
/// normalization happens when a solution is picked.
///
/// # Errors
///
/// Returns `WordSourceError::Http` on connection failures, non-success status codes or
/// a body that is not a JSON string array.
pub fn fetch_words(url: &str) -> Result<Vec<String>, WordSourceError> {
    fetch_words_with(&Client::new(), url)
}

/// Fetch candidate words from `url` using an existing client
///
/// # Errors
///
/// Same as [`fetch_words`].
pub fn fetch_words_with(client: &Client, url: &str) -> Result<Vec<String>, WordSourceError> {
    let http_err = |source| WordSourceError::Http {
        url: url.to_string(),
        source,
    };

    let words: Vec<String> = client
        .get(url)
        .send()
        .and_then(Response::error_for_status)
        .and_then(Response::json)
        .map_err(http_err)?;

    info!("Fetched {} words from {url}", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned HTTP response on a local port and return its URL
    fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/words", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // Drain the request head before answering
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        url
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn json_array_is_returned_as_sent() {
        let url = serve_once("200 OK", r#"["crane","Slate","toolong"]"#);
        let words = fetch_words_with(&local_client(), &url).unwrap();
        assert_eq!(words, vec!["crane", "Slate", "toolong"]);
    }

    #[test]
    fn error_status_is_http_error() {
        let url = serve_once("404 Not Found", r#"{"error":"missing"}"#);
        let err = fetch_words_with(&local_client(), &url).unwrap_err();
        match err {
            WordSourceError::Http { url: failed, source } => {
                assert_eq!(failed, url);
                assert_eq!(source.status().map(|s| s.as_u16()), Some(404));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_http_error() {
        let url = serve_once("200 OK", "not json at all");
        assert!(matches!(
            fetch_words_with(&local_client(), &url),
            Err(WordSourceError::Http { .. })
        ));
    }

    #[test]
    fn non_string_array_is_http_error() {
        let url = serve_once("200 OK", "[1, 2, 3]");
        assert!(matches!(
            fetch_words_with(&local_client(), &url),
            Err(WordSourceError::Http { .. })
        ));
    }

    #[test]
    fn refused_connection_is_http_error() {
        // Bind then drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/words");
        assert!(matches!(
            fetch_words_with(&local_client(), &url),
            Err(WordSourceError::Http { .. })
        ));
    }
}
