//! A [`Transport`] backed by `reqwest`.

use log::debug;

use crate::transport::{
    Error, Payload, Request, Response, Transport, TransportConfig, TransportFuture, query_pairs,
};

/// Sends form requests over HTTP with a shared `reqwest::Client`.
///
/// Requests are sent when the future returned by `send` is first polled.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let url = self.config.resolve_url(&request.url);
        debug!("{} {url}", request.method);

        let builder = self.client.request(request.method.into(), &url);
        let builder = match &request.payload {
            Payload::Query(params) => builder.query(&query_pairs(params)),
            Payload::Body(body) => builder.json(body),
        };

        let reply = builder.send().await?;
        let status = reply.status().as_u16();
        let body = reply.bytes().await?;
        let response = Response::from_body(status, &body);

        debug!("{} {url} -> {status}", request.method);

        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::Status(response))
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: Request) -> TransportFuture<'_> {
        Box::pin(self.execute(request))
    }
}
