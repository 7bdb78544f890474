//! External collaborators: compilation and deployment services.
//!
//! The pipeline only sees the [`Compiler`] and [`Deployer`] traits. The HTTP
//! implementations speak JSON to a configurable base URL; tests plug in
//! in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::PipelineError;

/// Body sent to the compilation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileRequest {
    pub content: String,
    pub name: String,
    pub language: String,
}

impl CompileRequest {
    pub fn solidity(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
            language: "Solidity".into(),
        }
    }
}

/// Compilation output handed from the compile stage to later stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledArtifact {
    pub abi: Value,
    pub bytecode: String,
}

/// Deployment receipt handed from the deploy stage to verify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub contract_address: String,
    pub transaction_hash: String,
}

#[async_trait]
pub trait Compiler: Send + Sync {
    async fn compile(&self, request: &CompileRequest) -> Result<CompiledArtifact, PipelineError>;
}

#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, artifact: &CompiledArtifact) -> Result<Deployment, PipelineError>;
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, PipelineError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("solcraft/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?)
}

/// Service error bodies look like `{"error": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ServiceResponse<T> {
    Ok(T),
    Err { error: String },
}

async fn post_json<B, T>(
    client: &reqwest::Client,
    service: &'static str,
    url: &str,
    body: &B,
) -> Result<T, PipelineError>
where
    B: Serialize + ?Sized,
    T: for<'de> Deserialize<'de>,
{
    debug!(service, url, "POST");
    let response = client.post(url).json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;

    match serde_json::from_str::<ServiceResponse<T>>(&text) {
        Ok(ServiceResponse::Ok(value)) if status.is_success() => Ok(value),
        Ok(ServiceResponse::Err { error }) => Err(PipelineError::Service {
            service,
            message: error,
        }),
        _ if !status.is_success() => Err(PipelineError::Service {
            service,
            message: format!("HTTP {}: {}", status, text.trim()),
        }),
        _ => Err(PipelineError::Service {
            service,
            message: format!("unexpected response: {}", text.trim()),
        }),
    }
}

/// Compilation over HTTP: `POST {base_url}/compile`.
pub struct HttpCompiler {
    client: reqwest::Client,
    url: String,
}

impl HttpCompiler {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PipelineError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: format!("{}/compile", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Compiler for HttpCompiler {
    async fn compile(&self, request: &CompileRequest) -> Result<CompiledArtifact, PipelineError> {
        post_json(&self.client, "compiler", &self.url, request).await
    }
}

/// Deployment over HTTP: `POST {base_url}/deploy` with the artifact.
pub struct HttpDeployer {
    client: reqwest::Client,
    url: String,
}

impl HttpDeployer {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PipelineError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: format!("{}/deploy", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Deployer for HttpDeployer {
    async fn deploy(&self, artifact: &CompiledArtifact) -> Result<Deployment, PipelineError> {
        post_json(&self.client, "deployer", &self.url, artifact).await
    }
}

/// Stand-in for a service with no configured URL. Every call fails.
pub struct Unconfigured(pub &'static str);

#[async_trait]
impl Compiler for Unconfigured {
    async fn compile(&self, _request: &CompileRequest) -> Result<CompiledArtifact, PipelineError> {
        Err(PipelineError::Service {
            service: self.0,
            message: "no service URL configured".into(),
        })
    }
}

#[async_trait]
impl Deployer for Unconfigured {
    async fn deploy(&self, _artifact: &CompiledArtifact) -> Result<Deployment, PipelineError> {
        Err(PipelineError::Service {
            service: self.0,
            message: "no service URL configured".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_compile_request_shape() {
        let request = CompileRequest::solidity("Token", "contract Token {}");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"content": "contract Token {}", "name": "Token", "language": "Solidity"})
        );
    }

    #[test]
    fn test_deployment_wire_names() {
        let deployment: Deployment = serde_json::from_value(json!({
            "contractAddress": "0x0000000000000000000000000000000000000001",
            "transactionHash": "0xabc"
        }))
        .unwrap();
        assert_eq!(deployment.transaction_hash, "0xabc");
    }

    #[test]
    fn test_service_error_body() {
        let parsed: ServiceResponse<Deployment> =
            serde_json::from_str(r#"{"error": "insufficient funds"}"#).unwrap();
        assert!(matches!(parsed, ServiceResponse::Err { error } if error == "insufficient funds"));
    }

    #[test]
    fn test_urls_trim_trailing_slash() {
        let compiler = HttpCompiler::new("http://localhost:9000/", Duration::from_secs(5)).unwrap();
        assert_eq!(compiler.url, "http://localhost:9000/compile");
        let deployer = HttpDeployer::new("http://localhost:9001", Duration::from_secs(5)).unwrap();
        assert_eq!(deployer.url, "http://localhost:9001/deploy");
    }

    #[tokio::test]
    async fn test_unconfigured_service_fails() {
        let err = Unconfigured("compiler")
            .compile(&CompileRequest::solidity("A", "contract A {}"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "compiler reported: no service URL configured");
    }
}
