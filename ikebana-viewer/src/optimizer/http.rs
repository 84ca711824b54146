use super::protocol::{ArrangementId, BaseRequest, ExtensionRequest};
use super::transport::OptimizerTransport;
use crate::error::RunError;
use constants::endpoints::{OPTIMIZE_EXTEND_PATH, OPTIMIZE_PATH, UPLOAD_POINT_CLOUD_PATH};
use serde_json::Value;
use std::time::Duration;

/// `ureq`-backed transport talking to the optimizer server.
pub struct HttpOptimizer {
    server_url: String,
    agent: ureq::Agent,
}

impl HttpOptimizer {
    pub fn new(server_url: &str, timeout: Duration) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

/// Map a `ureq` outcome to a JSON body. Error statuses are network errors
/// unless the server explained itself with an `error` field.
fn read_json(outcome: Result<ureq::Response, ureq::Error>) -> Result<Value, RunError> {
    match outcome {
        Ok(response) => response
            .into_json::<Value>()
            .map_err(|err| RunError::protocol(format!("invalid JSON body: {err}"))),
        Err(ureq::Error::Status(code, response)) => match response.into_json::<Value>() {
            Ok(body) if body.get("error").is_some() => Ok(body),
            _ => Err(RunError::network(format!("server responded with status {code}"))),
        },
        Err(ureq::Error::Transport(transport)) => Err(RunError::network(transport.to_string())),
    }
}

impl OptimizerTransport for HttpOptimizer {
    fn request_base(&self, request: &BaseRequest) -> Result<Value, RunError> {
        read_json(
            self.agent
                .get(&self.url(OPTIMIZE_PATH))
                .query("forced_flower", &request.forced_flower)
                .query("vase", &request.vase)
                .call(),
        )
    }

    fn request_extension(&self, request: &ExtensionRequest) -> Result<Value, RunError> {
        read_json(
            self.agent
                .post(&self.url(OPTIMIZE_EXTEND_PATH))
                .set("Content-Type", "application/json")
                .send_json(request),
        )
    }

    fn upload_point_cloud(
        &self,
        arrangement_id: &ArrangementId,
        ply: &str,
    ) -> Result<Value, RunError> {
        read_json(
            self.agent
                .post(&self.url(UPLOAD_POINT_CLOUD_PATH))
                .query("arr_id", &arrangement_id.as_query_value())
                .set("Content-Type", "application/octet-stream")
                .send_bytes(ply.as_bytes()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let optimizer = HttpOptimizer::new("http://localhost:5000/", Duration::from_secs(1));
        assert_eq!(optimizer.url(OPTIMIZE_PATH), "http://localhost:5000/optimize");
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        let optimizer = HttpOptimizer::new("http://127.0.0.1:9", Duration::from_millis(200));
        let err = optimizer.request_base(&BaseRequest::default()).unwrap_err();
        assert!(matches!(err, RunError::Network(_)));
    }
}
