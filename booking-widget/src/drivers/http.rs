use std::task::{Context, Poll};

use booking_core::format::{
    envelope::Reply,
    error::CallError,
    frame::Request,
    message::{decode_reply, EncodeDecode},
};
use flume::{r#async::RecvStream, unbounded, Sender};
use futures::StreamExt;
use reqwest::{header::CONTENT_TYPE, redirect, Client};
use url::Url;

use crate::{
    interfaces::{Gateway, RequestId},
    widget::config::{ConfigError, WidgetConfig},
};

type Completion = (RequestId, Result<Reply, CallError>);

/// [`Gateway`] that POSTs every request to one endpoint.
///
/// Each call runs on its own tokio task; completions are delivered in the
/// order they finish.
pub struct HttpGateway {
    client: Client,
    endpoint: Url,
    done_tx: Sender<Completion>,
    done_rx: RecvStream<'static, Completion>,
}

impl HttpGateway {
    pub fn new(endpoint: Url) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(10))
            .build()?;
        let (done_tx, done_rx) = unbounded();
        Ok(Self {
            client,
            endpoint,
            done_tx,
            done_rx: done_rx.into_stream(),
        })
    }

    pub fn from_config(config: &WidgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let endpoint = Url::parse(&config.endpoint_url).map_err(|e| ConfigError::Endpoint {
            url: config.endpoint_url.clone(),
            reason: e.to_string(),
        })?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

async fn post(client: Client, endpoint: Url, body: String) -> Result<Reply, CallError> {
    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| CallError::Transport(e.to_string()))?;
    let raw = response
        .text()
        .await
        .map_err(|e| CallError::Transport(e.to_string()))?;
    decode_reply(&raw)
}

impl Gateway for HttpGateway {
    async fn send_request(&mut self, id: RequestId, request: Request) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let body = request.encode();
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            let res = post(client, endpoint, body).await;
            if done_tx.send_async((id, res)).await.is_err() {
                log::warn!("gateway dropped before call {} finished", id);
            }
        });
    }

    fn poll_gateway_response(&mut self, cx: &mut Context<'_>) -> Poll<(RequestId, Result<Reply, CallError>)> {
        match self.done_rx.poll_next_unpin(cx) {
            Poll::Ready(Some(done)) => Poll::Ready(done),
            _ => Poll::Pending,
        }
    }
}
