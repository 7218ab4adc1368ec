//! HTTP-backed dispatch sinks.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, RequestBuilder};

use hangar_core::{ControlMessage, DeployCommand, DispatchError, DispatchSink};

use super::{add_auth, http_client, trim_base};

async fn dispatch_request(
    request: RequestBuilder,
    token: Option<&str>,
) -> Result<(), DispatchError> {
    let response = add_auth(request, token)
        .send()
        .await
        .map_err(|e| DispatchError::Unreachable(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let detail = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => status.to_string(),
    };
    Err(DispatchError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

/// Dispatches commands to the deployment REST API.
///
/// Deployments go to `POST {base_url}/deployments`, deletions to
/// `DELETE {base_url}/servers/{server_id}`.
pub struct ApiSink {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiSink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            base_url: trim_base(base_url),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut sink = Self::new(base_url);
        sink.token = Some(token.into());
        sink
    }
}

#[async_trait]
impl DispatchSink for ApiSink {
    async fn deploy(&self, command: &DeployCommand) -> Result<(), DispatchError> {
        let url = format!("{}/deployments", self.base_url);
        debug!("Posting deployment to {}", url);

        dispatch_request(self.client.post(&url).json(command), self.token.as_deref()).await?;
        info!(
            "Deployment accepted: template '{}' for user '{}'",
            command.template_id, command.user_id
        );
        Ok(())
    }

    async fn delete(&self, server_id: &str) -> Result<(), DispatchError> {
        let url = format!(
            "{}/servers/{}",
            self.base_url,
            urlencoding::encode(server_id)
        );
        debug!("Requesting deletion at {}", url);

        dispatch_request(self.client.delete(&url), self.token.as_deref()).await?;
        info!("Deletion accepted for server '{}'", server_id);
        Ok(())
    }
}

/// Dispatches commands as messages through a queue publish gateway.
///
/// Every command is serialized as a [`ControlMessage`] and posted to
/// `POST {gateway_url}/publish/{queue}`. The gateway answering with a 2xx
/// means the message was enqueued; consumers pick it up from there.
pub struct QueueSink {
    client: Client,
    publish_url: String,
    token: Option<String>,
}

impl QueueSink {
    pub fn new(gateway_url: impl Into<String>, queue: &str) -> Self {
        Self {
            client: http_client(),
            publish_url: format!(
                "{}/publish/{}",
                trim_base(gateway_url),
                urlencoding::encode(queue)
            ),
            token: None,
        }
    }

    pub fn with_token(
        gateway_url: impl Into<String>,
        queue: &str,
        token: impl Into<String>,
    ) -> Self {
        let mut sink = Self::new(gateway_url, queue);
        sink.token = Some(token.into());
        sink
    }

    async fn publish(&self, message: &ControlMessage) -> Result<(), DispatchError> {
        debug!("Publishing control message to {}", self.publish_url);
        dispatch_request(
            self.client.post(&self.publish_url).json(message),
            self.token.as_deref(),
        )
        .await
    }
}

#[async_trait]
impl DispatchSink for QueueSink {
    async fn deploy(&self, command: &DeployCommand) -> Result<(), DispatchError> {
        self.publish(&ControlMessage::Deploy(command.clone())).await?;
        info!(
            "Deploy message enqueued: template '{}' for user '{}'",
            command.template_id, command.user_id
        );
        Ok(())
    }

    async fn delete(&self, server_id: &str) -> Result<(), DispatchError> {
        self.publish(&ControlMessage::Delete {
            server_id: server_id.to_string(),
        })
        .await?;
        info!("Delete message enqueued for server '{}'", server_id);
        Ok(())
    }
}
