#[cfg(test)]
mod tests {
    use crate::config::LlmConfig;
    use crate::error::{CheckupError, Result};
    use crate::tools::recommend::*;
    use std::cell::{Cell, RefCell};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;
    use std::time::{Duration, Instant};

    /// Records every request and answers with a canned reply.
    struct RecordingBackend {
        calls: Cell<usize>,
        last: RefCell<Option<(String, ChatRequest)>>,
        reply: std::result::Result<String, String>,
    }

    impl RecordingBackend {
        fn answering(text: &str) -> Self {
            Self {
                calls: Cell::new(0),
                last: RefCell::new(None),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                reply: Err(detail.to_string()),
                ..Self::answering("")
            }
        }
    }

    impl ChatBackend for RecordingBackend {
        fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some((api_key.to_string(), request.clone()));
            self.reply.clone().map_err(CheckupError::Other)
        }
    }

    const SUMMARY: &str = "65% Off | Basic Panel in CMC (Vellore) Test | Include 83 Parameters";

    #[test]
    fn missing_key_returns_instructions_without_calling_backend() {
        let backend = RecordingBackend::answering("unused");
        let recommender = LlmRecommender::with_backend(LlmConfig::default(), &backend);

        let err = recommender.generate(SUMMARY).unwrap_err();
        assert!(matches!(err, CheckupError::MissingCredential));
        assert!(recommender.analyze(SUMMARY).contains("OPENROUTER_API_KEY"));
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn success_returns_model_text_unmodified() {
        let reply = "## Comparison\n\n| Package | Price |\n|---|---|\n| Basic | 799 |\n";
        let backend = RecordingBackend::answering(reply);
        let config = LlmConfig::default().with_api_key("sk-or-test");
        let recommender = LlmRecommender::with_backend(config, &backend);

        assert_eq!(recommender.generate(SUMMARY).unwrap(), reply);
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn request_uses_fixed_model_settings() {
        let backend = RecordingBackend::answering("ok");
        let config = LlmConfig::default().with_api_key("sk-or-test");
        let recommender = LlmRecommender::with_backend(config, &backend);
        recommender.generate(SUMMARY).unwrap();

        let (key, request) = backend.last.borrow().clone().unwrap();
        assert_eq!(key, "sk-or-test");
        assert_eq!(request.model, "openai/gpt-4o-mini");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, 2000);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0], Message::system(SYSTEM_PROMPT));
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.contains(SUMMARY));
    }

    #[test]
    fn backend_failure_becomes_formatted_message() {
        let backend = RecordingBackend::failing("connection refused");
        let config = LlmConfig::default().with_api_key("sk-or-test");
        let recommender = LlmRecommender::with_backend(config, &backend);

        let err = recommender.generate(SUMMARY).unwrap_err();
        assert!(matches!(err, CheckupError::Recommendation(_)));
        assert_eq!(
            recommender.analyze(SUMMARY),
            "❌ **LLM Analysis Error:** connection refused"
        );
    }

    #[test]
    fn upstream_errors_pass_through_untouched() {
        let backend = RecordingBackend::answering("unused");
        let config = LlmConfig::default().with_api_key("sk-or-test");
        let recommender = LlmRecommender::with_backend(config, &backend);

        for text in [
            "Error fetching URL: HTTP status 404 Not Found for url: https://x.test",
            "No health packages found on this page.",
            "",
        ] {
            assert_eq!(recommender.generate(text).unwrap(), text);
        }
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn request_serializes_as_chat_completion_body() {
        let recommender = LlmRecommender::with_backend(
            LlmConfig::default(),
            RecordingBackend::answering("unused"),
        );
        let body = serde_json::to_value(recommender.build_request("x")).unwrap();
        assert_eq!(body["model"], "openai/gpt-4o-mini");
        assert_eq!(body["max_tokens"], 2000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
    }

    /// Reads one HTTP request (headers plus Content-Length body).
    fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let body_len = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (key, value) = line.split_once(':')?;
                        key.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    return;
                }
            }
        }
    }

    /// Chat endpoint on localhost that answers once, after `delay`.
    fn slow_chat_server(delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            read_request(&mut stream);
            thread::sleep(delay);
            let body = r###"{"choices":[{"message":{"role":"assistant","content":"## Verdict\n\nBasic Panel"}}]}"###;
            let _ = write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
        });
        base_url
    }

    fn live_config(base_url: String) -> LlmConfig {
        LlmConfig {
            base_url,
            ..LlmConfig::default()
        }
        .with_api_key("sk-or-test")
    }

    #[test]
    fn slow_completion_outlives_default_http_timeout() {
        let base_url = slow_chat_server(Duration::from_secs(32));
        let recommender = LlmRecommender::new(live_config(base_url)).unwrap();

        let started = Instant::now();
        let reply = recommender.analyze(SUMMARY);
        assert!(started.elapsed() >= Duration::from_secs(32));
        assert_eq!(reply, "## Verdict\n\nBasic Panel");
    }

    #[test]
    fn configured_timeout_bounds_completion() {
        let base_url = slow_chat_server(Duration::from_secs(5));
        let config = LlmConfig {
            timeout: Duration::from_millis(300),
            ..live_config(base_url)
        };
        let recommender = LlmRecommender::new(config).unwrap();

        let started = Instant::now();
        let err = recommender.generate(SUMMARY).unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(matches!(err, CheckupError::Recommendation(_)));
        assert!(err.to_string().starts_with("❌ **LLM Analysis Error:**"));
    }
}
