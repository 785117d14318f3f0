use async_trait::async_trait;
use gloo_net::http::Request;
use hangman_shared::client::{ApiRequest, GameClient, Method, Transport};
use hangman_shared::constants::NETWORK_ERROR;
use hangman_shared::error::{ClientError, RawResponse};

use crate::config::get_api_base_url;

pub type ApiClient = GameClient<GlooTransport>;

pub fn game_client() -> ApiClient {
    GameClient::new(GlooTransport::new(get_api_base_url()))
}

pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

fn network_error(err: gloo_net::Error) -> ClientError {
    log::error!("Network error: {:?}", err);
    ClientError::transport(format!("{}: {}", NETWORK_ERROR, err))
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");

        let response = match &request.body {
            Some(body) => builder.json(body).map_err(network_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        log::debug!("{:?} {} -> {}", request.method, url, status);

        Ok(RawResponse { status, body })
    }
}
