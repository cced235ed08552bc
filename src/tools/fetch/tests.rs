#[cfg(test)]
mod tests {
    use crate::config::{FetchConfig, RetryPolicy};
    use crate::error::CheckupError;
    use crate::tools::fetch::retry::fetch_with_retry;
    use crate::tools::fetch::{HttpFetcher, HttpResponse, Transport};
    use reqwest::header::HeaderMap;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays a scripted sequence of responses and counts calls.
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<HttpResponse, String>>>,
        calls: Cell<usize>,
        seen_headers: RefCell<Option<HeaderMap>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<Result<HttpResponse, String>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: Cell::new(0),
                seen_headers: RefCell::new(None),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn get(&self, _url: &str, headers: &HeaderMap) -> Result<HttpResponse, String> {
            self.calls.set(self.calls.get() + 1);
            *self.seen_headers.borrow_mut() = Some(headers.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted reply left".into()))
        }
    }

    fn status(code: u16) -> Result<HttpResponse, String> {
        Ok(HttpResponse {
            status: code,
            reason: String::new(),
            body: String::new(),
        })
    }

    fn ok(body: &str) -> Result<HttpResponse, String> {
        Ok(HttpResponse {
            status: 200,
            reason: "OK".into(),
            body: body.into(),
        })
    }

    fn instant_config() -> FetchConfig {
        FetchConfig {
            retry: RetryPolicy {
                backoff_factor: 0.0,
                ..RetryPolicy::default()
            },
            ..FetchConfig::default()
        }
    }

    const URL: &str = "https://example.com/lab/cmc-vellore";

    #[test]
    fn two_503s_then_success_takes_three_attempts() {
        let transport = ScriptedTransport::new(vec![status(503), status(503), ok("<html/>")]);
        let fetcher = HttpFetcher::with_transport(&transport, instant_config());

        let result = fetcher.fetch(URL).unwrap();
        assert_eq!(result.html, "<html/>");
        assert_eq!(result.attempts, 3);
        assert_eq!(transport.calls.get(), 3);
    }

    #[test]
    fn gives_up_after_three_retries() {
        let transport = ScriptedTransport::new(vec![
            status(502),
            status(502),
            status(502),
            status(502),
            ok("never reached"),
        ]);
        let fetcher = HttpFetcher::with_transport(&transport, instant_config());

        let err = fetcher.fetch(URL).unwrap_err();
        assert!(matches!(err, CheckupError::Fetch(_)));
        assert!(err.to_string().starts_with("Error fetching URL:"));
        assert_eq!(transport.calls.get(), 4);
    }

    #[test]
    fn client_errors_are_not_retried() {
        let transport = ScriptedTransport::new(vec![
            Ok(HttpResponse {
                status: 404,
                reason: "Not Found".into(),
                body: String::new(),
            }),
            ok("never reached"),
        ]);
        let fetcher = HttpFetcher::with_transport(&transport, instant_config());

        let err = fetcher.fetch(URL).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Error fetching URL: HTTP status 404 Not Found for url: {URL}")
        );
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn transport_errors_are_retried() {
        let transport =
            ScriptedTransport::new(vec![Err("connection reset".into()), ok("<html>ok</html>")]);
        let fetcher = HttpFetcher::with_transport(&transport, instant_config());

        assert_eq!(fetcher.fetch_html(URL).unwrap(), "<html>ok</html>");
        assert_eq!(transport.calls.get(), 2);
    }

    #[test]
    fn invalid_url_never_reaches_transport() {
        let transport = ScriptedTransport::new(vec![ok("x")]);
        let fetcher = HttpFetcher::with_transport(&transport, instant_config());

        assert!(matches!(
            fetcher.fetch("ftp://example.com"),
            Err(CheckupError::InvalidUrl(_))
        ));
        assert!(matches!(
            fetcher.fetch("not a url"),
            Err(CheckupError::InvalidUrl(_))
        ));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn sends_browser_headers() {
        let transport = ScriptedTransport::new(vec![ok("x")]);
        let fetcher = HttpFetcher::with_transport(&transport, instant_config());
        fetcher.fetch(URL).unwrap();

        let headers = transport.seen_headers.borrow().clone().unwrap();
        for key in ["user-agent", "accept", "accept-language", "connection"] {
            assert!(headers.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn backoff_delays_grow_between_retries() {
        let transport =
            ScriptedTransport::new(vec![status(500), status(503), status(504), ok("done")]);
        let slept = RefCell::new(Vec::new());

        let result = fetch_with_retry(
            &transport,
            URL,
            &HeaderMap::new(),
            &RetryPolicy::default(),
            |d| slept.borrow_mut().push(d),
        )
        .unwrap();

        assert_eq!(result.attempts, 4);
        // First retry is immediate and therefore never sleeps.
        assert_eq!(
            *slept.borrow(),
            vec![Duration::from_secs(2), Duration::from_secs(4)]
        );
    }
}
