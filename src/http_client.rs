//! Shared `ureq` agent and size-capped body reading for the prediction client.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("vidpredict/", env!("CARGO_PKG_VERSION"));

/// Why a response body could not be taken into memory.
#[derive(Debug, thiserror::Error)]
pub(crate) enum BodyError {
    #[error("Response body larger than {limit} bytes")]
    TooLarge { limit: usize },
    #[error("Failed to read response body: {0}")]
    Read(#[from] io::Error),
    #[error("Response body is not UTF-8")]
    NotUtf8,
}

/// Agent used for every outbound request; transport timeouts live here.
pub(crate) fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .build()
    })
}

/// Read a response body as text, refusing anything over `limit` bytes.
///
/// A declared `Content-Length` over the limit fails before any read.
pub(crate) fn read_text_body(response: ureq::Response, limit: usize) -> Result<String, BodyError> {
    let declared = response
        .header("Content-Length")
        .and_then(|value| value.trim().parse::<u64>().ok());
    if declared.is_some_and(|length| length > limit as u64) {
        return Err(BodyError::TooLarge { limit });
    }
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)?;
    if bytes.len() > limit {
        return Err(BodyError::TooLarge { limit });
    }
    String::from_utf8(bytes).map_err(|_| BodyError::NotUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn respond_once(raw_response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 2048];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(&raw_response);
            }
        });
        format!("http://{addr}/predict")
    }

    #[test]
    fn declared_length_over_limit_is_rejected() {
        let url = respond_once(b"HTTP/1.1 200 OK\r\nContent-Length: 500\r\n\r\n{}".to_vec());
        let response = agent().get(&url).call().unwrap();
        assert!(matches!(
            read_text_body(response, 64),
            Err(BodyError::TooLarge { limit: 64 })
        ));
    }

    #[test]
    fn streamed_body_over_limit_is_rejected() {
        let mut raw = b"HTTP/1.0 200 OK\r\n\r\n".to_vec();
        raw.extend(std::iter::repeat_n(b'x', 80));
        let url = respond_once(raw);
        let response = agent().get(&url).call().unwrap();
        assert!(matches!(
            read_text_body(response, 64),
            Err(BodyError::TooLarge { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let mut raw = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\n".to_vec();
        raw.extend([0xff, 0xfe]);
        let url = respond_once(raw);
        let response = agent().get(&url).call().unwrap();
        assert!(matches!(read_text_body(response, 64), Err(BodyError::NotUtf8)));
    }

    #[test]
    fn prediction_body_within_limit_is_returned() {
        let body = r#"{"prediction":"Views: 42000"}"#;
        let raw = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        let url = respond_once(raw.into_bytes());
        let response = agent().get(&url).call().unwrap();
        assert_eq!(read_text_body(response, 64).unwrap(), body);
    }
}
