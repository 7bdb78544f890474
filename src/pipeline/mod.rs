//! # Deployment Pipeline
//!
//! Runs a user-selected chain of stages over a contract:
//!
//! ```text
//! import → compile → test → deploy → verify
//! ```
//!
//! Each stage reads what earlier stages produced from a [`PipelineContext`]
//! and writes its own output back into it. The compile artifact and the
//! deployment receipt travel through the context only; nothing is kept
//! between runs.
//!
//! The run stops at the first failing stage. Every requested stage shows up
//! in the [`PipelineReport`], later ones as `skipped`.

mod services;

pub use services::{
    CompileRequest, CompiledArtifact, Compiler, Deployer, Deployment, HttpCompiler, HttpDeployer,
    Unconfigured,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::{info, warn};

use crate::canvas::{Canvas, CanvasComponent, EmitOptions};
use crate::error::PipelineError;
use crate::parser;
use crate::validate::{self, Severity};

static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern is valid"));

// ============================================================================
// STAGES
// ============================================================================

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Import,
    Compile,
    Test,
    Deploy,
    Verify,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Import,
        Stage::Compile,
        Stage::Test,
        Stage::Deploy,
        Stage::Verify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Import => "import",
            Stage::Compile => "compile",
            Stage::Test => "test",
            Stage::Deploy => "deploy",
            Stage::Verify => "verify",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "import" => Ok(Stage::Import),
            "compile" => Ok(Stage::Compile),
            "test" => Ok(Stage::Test),
            "deploy" => Ok(Stage::Deploy),
            "verify" => Ok(Stage::Verify),
            other => Err(PipelineError::UnknownStage(other.to_string())),
        }
    }
}

/// Parse a comma-separated stage list (`"import,compile"`).
///
/// The result is deduplicated and in execution order.
pub fn parse_stages(list: &str) -> Result<Vec<Stage>, PipelineError> {
    let mut stages = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(Stage::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    stages.sort();
    stages.dedup();
    Ok(stages)
}

// ============================================================================
// CONFIGURATION
// ============================================================================

fn default_timeout_secs() -> u64 {
    30
}

fn default_contract_name() -> String {
    EmitOptions::default().contract_name
}

/// Pipeline settings, loadable from JSON.
///
/// ```json
/// {"stages": ["import", "compile"], "compilerUrl": "http://localhost:9000"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    #[serde(default = "all_stages")]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub compiler_url: Option<String>,
    #[serde(default)]
    pub deployer_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Contract name used for emission and the compile request.
    #[serde(default = "default_contract_name")]
    pub contract_name: String,
}

fn all_stages() -> Vec<Stage> {
    Stage::ALL.to_vec()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stages: all_stages(),
            compiler_url: None,
            deployer_url: None,
            timeout_secs: default_timeout_secs(),
            contract_name: default_contract_name(),
        }
    }
}

// ============================================================================
// CONTEXT AND REPORT
// ============================================================================

/// What the pipeline starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum PipelineInput {
    /// A canvas, emitted at the import stage.
    Canvas(Canvas),
    /// Pasted Solidity, used as-is.
    Solidity(String),
}

/// State handed from stage to stage.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub input: PipelineInput,
    pub contract_name: String,
    /// Set by import.
    pub source: Option<String>,
    /// Components behind the source, for diagnostics. Set by import.
    pub components: Vec<CanvasComponent>,
    /// Set by compile.
    pub artifact: Option<CompiledArtifact>,
    /// Set by deploy.
    pub deployment: Option<Deployment>,
}

impl PipelineContext {
    pub fn new(input: PipelineInput, contract_name: impl Into<String>) -> Self {
        Self {
            input,
            contract_name: contract_name.into(),
            source: None,
            components: Vec::new(),
            artifact: None,
            deployment: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Succeeded,
    Failed,
    Skipped,
}

/// Result of one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutcome {
    pub stage: Stage,
    pub status: StageStatus,
    pub message: String,
}

/// Result of a whole run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub stages: Vec<StageOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<CompiledArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
}

impl PipelineReport {
    /// True when no stage failed.
    pub fn succeeded(&self) -> bool {
        self.stages.iter().all(|s| s.status != StageStatus::Failed)
    }

    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Stage runner bound to a compiler and a deployer.
#[derive(Clone)]
pub struct Pipeline {
    compiler: Arc<dyn Compiler>,
    deployer: Arc<dyn Deployer>,
}

impl Pipeline {
    pub fn new(compiler: Arc<dyn Compiler>, deployer: Arc<dyn Deployer>) -> Self {
        Self { compiler, deployer }
    }

    /// HTTP collaborators from config. A missing URL yields a service that
    /// fails when its stage runs.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let compiler: Arc<dyn Compiler> = match &config.compiler_url {
            Some(url) => Arc::new(HttpCompiler::new(url, timeout)?),
            None => Arc::new(Unconfigured("compiler")),
        };
        let deployer: Arc<dyn Deployer> = match &config.deployer_url {
            Some(url) => Arc::new(HttpDeployer::new(url, timeout)?),
            None => Arc::new(Unconfigured("deployer")),
        };
        Ok(Self::new(compiler, deployer))
    }

    /// Run `stages` (deduplicated, in execution order) over `input`.
    pub async fn run(
        &self,
        input: PipelineInput,
        stages: &[Stage],
        contract_name: &str,
    ) -> PipelineReport {
        let mut stages = stages.to_vec();
        stages.sort();
        stages.dedup();

        let mut ctx = PipelineContext::new(input, contract_name);
        let mut outcomes = Vec::with_capacity(stages.len());
        let mut failed = false;

        for stage in stages {
            if failed {
                outcomes.push(StageOutcome {
                    stage,
                    status: StageStatus::Skipped,
                    message: "skipped after earlier failure".into(),
                });
                continue;
            }

            info!(%stage, "running stage");
            let outcome = match self.run_stage(stage, &mut ctx).await {
                Ok(message) => {
                    info!(%stage, %message, "stage succeeded");
                    StageOutcome {
                        stage,
                        status: StageStatus::Succeeded,
                        message,
                    }
                }
                Err(e) => {
                    warn!(%stage, error = %e, "stage failed");
                    failed = true;
                    StageOutcome {
                        stage,
                        status: StageStatus::Failed,
                        message: e.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }

        PipelineReport {
            stages: outcomes,
            source: ctx.source,
            artifact: ctx.artifact,
            deployment: ctx.deployment,
        }
    }

    async fn run_stage(
        &self,
        stage: Stage,
        ctx: &mut PipelineContext,
    ) -> Result<String, PipelineError> {
        match stage {
            Stage::Import => import(ctx),
            Stage::Compile => {
                let source = ctx.source.as_deref().ok_or(PipelineError::MissingArtifact {
                    stage: "compile",
                    requirement: "imported source",
                })?;
                let request = CompileRequest::solidity(ctx.contract_name.as_str(), source);
                let artifact = self.compiler.compile(&request).await?;
                let message = format!("compiled {} bytes of bytecode", bytecode_len(&artifact));
                ctx.artifact = Some(artifact);
                Ok(message)
            }
            Stage::Test => test(ctx),
            Stage::Deploy => {
                let artifact = ctx.artifact.as_ref().ok_or(PipelineError::MissingArtifact {
                    stage: "deploy",
                    requirement: "a compiled artifact",
                })?;
                let deployment = self.deployer.deploy(artifact).await?;
                let message = format!(
                    "deployed at {} (tx {})",
                    deployment.contract_address, deployment.transaction_hash
                );
                ctx.deployment = Some(deployment);
                Ok(message)
            }
            Stage::Verify => verify(ctx),
        }
    }
}

fn import(ctx: &mut PipelineContext) -> Result<String, PipelineError> {
    let (source, components) = match &ctx.input {
        PipelineInput::Canvas(canvas) => {
            let options = EmitOptions {
                contract_name: ctx.contract_name.clone(),
                ..Default::default()
            };
            (canvas.emit_with(&options), canvas.components().to_vec())
        }
        PipelineInput::Solidity(text) => {
            if text.trim().is_empty() {
                return Err(PipelineError::EmptySource);
            }
            (text.clone(), parser::parse(text).components)
        }
    };

    let message = format!(
        "{} lines, {} components",
        source.lines().count(),
        components.len()
    );
    ctx.source = Some(source);
    ctx.components = components;
    Ok(message)
}

fn bytecode_len(artifact: &CompiledArtifact) -> usize {
    artifact.bytecode.trim_start_matches("0x").len() / 2
}

/// Static checks on the compile artifact plus canvas diagnostics.
fn test(ctx: &PipelineContext) -> Result<String, PipelineError> {
    let artifact = ctx.artifact.as_ref().ok_or(PipelineError::MissingArtifact {
        stage: "test",
        requirement: "a compiled artifact",
    })?;

    let bytecode = artifact.bytecode.trim_start_matches("0x");
    if bytecode.is_empty() {
        return Err(PipelineError::Check("bytecode is empty".into()));
    }
    if !bytecode.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PipelineError::Check("bytecode is not hex".into()));
    }
    let Some(abi) = artifact.abi.as_array() else {
        return Err(PipelineError::Check("ABI is not an array".into()));
    };

    let diagnostics = validate::check(&ctx.components);
    if let Some(error) = diagnostics.iter().find(|d| d.severity == Severity::Error) {
        return Err(PipelineError::Check(error.to_string()));
    }
    Ok(format!("{} ABI entries, {} warnings", abi.len(), diagnostics.len()))
}

fn verify(ctx: &PipelineContext) -> Result<String, PipelineError> {
    let deployment = ctx.deployment.as_ref().ok_or(PipelineError::MissingArtifact {
        stage: "verify",
        requirement: "a deployment",
    })?;
    if !ADDRESS.is_match(&deployment.contract_address) {
        return Err(PipelineError::Check(format!(
            "'{}' is not a contract address",
            deployment.contract_address
        )));
    }
    Ok(format!("{} verified", deployment.contract_address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    const ADDRESS_OK: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    /// Compiler fake that records the request it saw.
    struct FakeCompiler {
        seen: Mutex<Option<CompileRequest>>,
        bytecode: &'static str,
    }

    #[async_trait]
    impl Compiler for FakeCompiler {
        async fn compile(&self, request: &CompileRequest) -> Result<CompiledArtifact, PipelineError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            Ok(CompiledArtifact {
                abi: json!([{"type": "constructor", "inputs": []}]),
                bytecode: self.bytecode.to_string(),
            })
        }
    }

    struct FakeDeployer {
        address: &'static str,
    }

    #[async_trait]
    impl Deployer for FakeDeployer {
        async fn deploy(&self, _artifact: &CompiledArtifact) -> Result<Deployment, PipelineError> {
            Ok(Deployment {
                contract_address: self.address.to_string(),
                transaction_hash: "0xfeed".into(),
            })
        }
    }

    fn pipeline(bytecode: &'static str, address: &'static str) -> (Pipeline, Arc<FakeCompiler>) {
        let compiler = Arc::new(FakeCompiler {
            seen: Mutex::new(None),
            bytecode,
        });
        let pipeline = Pipeline::new(compiler.clone(), Arc::new(FakeDeployer { address }));
        (pipeline, compiler)
    }

    fn statuses(report: &PipelineReport) -> Vec<(Stage, StageStatus)> {
        report.stages.iter().map(|s| (s.stage, s.status)).collect()
    }

    #[test]
    fn test_parse_stages() {
        assert_eq!(
            parse_stages("deploy, import,compile,import").unwrap(),
            vec![Stage::Import, Stage::Compile, Stage::Deploy]
        );
        assert!(matches!(
            parse_stages("import,lint"),
            Err(PipelineError::UnknownStage(s)) if s == "lint"
        ));
        assert!(parse_stages("").unwrap().is_empty());
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"compilerUrl": "http://localhost:9000"}"#).unwrap();
        assert_eq!(config.stages, Stage::ALL.to_vec());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.contract_name, "GeneratedContract");
        assert_eq!(config.deployer_url, None);
    }

    #[tokio::test]
    async fn test_full_run_passes_artifacts_forward() {
        let (pipeline, compiler) = pipeline("0x6080", ADDRESS_OK);
        let report = pipeline
            .run(PipelineInput::Canvas(Canvas::new()), &Stage::ALL, "Empty")
            .await;

        assert!(report.succeeded(), "{:?}", report.stages);
        assert_eq!(report.deployment.as_ref().unwrap().contract_address, ADDRESS_OK);

        let seen = compiler.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.name, "Empty");
        assert_eq!(seen.language, "Solidity");
        assert!(seen.content.contains("contract Empty {"));
    }

    #[tokio::test]
    async fn test_deploy_without_compile_fails() {
        let (pipeline, _) = pipeline("0x6080", ADDRESS_OK);
        let report = pipeline
            .run(
                PipelineInput::Solidity("contract A {}".into()),
                &[Stage::Import, Stage::Deploy, Stage::Verify],
                "A",
            )
            .await;
        assert_eq!(
            statuses(&report),
            vec![
                (Stage::Import, StageStatus::Succeeded),
                (Stage::Deploy, StageStatus::Failed),
                (Stage::Verify, StageStatus::Skipped),
            ]
        );
        assert_eq!(
            report.outcome(Stage::Deploy).unwrap().message,
            "stage 'deploy' requires a compiled artifact"
        );
    }

    #[tokio::test]
    async fn test_empty_paste_fails_import() {
        let (pipeline, _) = pipeline("0x6080", ADDRESS_OK);
        let report = pipeline
            .run(PipelineInput::Solidity("   \n".into()), &[Stage::Import, Stage::Compile], "A")
            .await;
        assert_eq!(report.stages[0].message, "source is empty");
        assert_eq!(report.stages[1].status, StageStatus::Skipped);
        assert!(!report.succeeded());
    }

    #[tokio::test]
    async fn test_empty_bytecode_fails_test_stage() {
        let (pipeline, _) = pipeline("0x", ADDRESS_OK);
        let report = pipeline
            .run(
                PipelineInput::Canvas(Canvas::new()),
                &[Stage::Import, Stage::Compile, Stage::Test],
                "A",
            )
            .await;
        let test = report.outcome(Stage::Test).unwrap();
        assert_eq!(test.status, StageStatus::Failed);
        assert_eq!(test.message, "check failed: bytecode is empty");
    }

    #[tokio::test]
    async fn test_canvas_errors_fail_test_stage() {
        let mut canvas = Canvas::new();
        canvas.instantiate("payable-function", 0.0, 0.0).unwrap();
        let (pipeline, _) = pipeline("0x6080", ADDRESS_OK);
        let report = pipeline
            .run(
                PipelineInput::Canvas(canvas),
                &[Stage::Import, Stage::Compile, Stage::Test],
                "A",
            )
            .await;
        let test = report.outcome(Stage::Test).unwrap();
        assert_eq!(test.status, StageStatus::Failed);
        assert!(test.message.contains("PaymentReceived"), "{}", test.message);
    }

    #[tokio::test]
    async fn test_verify_rejects_bad_address() {
        let (pipeline, _) = pipeline("0x6080", "0x1234");
        let report = pipeline
            .run(PipelineInput::Canvas(Canvas::new()), &Stage::ALL, "A")
            .await;
        let verify = report.outcome(Stage::Verify).unwrap();
        assert_eq!(verify.status, StageStatus::Failed);
        assert_eq!(verify.message, "check failed: '0x1234' is not a contract address");
    }

    #[tokio::test]
    async fn test_unconfigured_compiler() {
        let pipeline = Pipeline::from_config(&PipelineConfig::default()).unwrap();
        let report = pipeline
            .run(PipelineInput::Canvas(Canvas::new()), &[Stage::Import, Stage::Compile], "A")
            .await;
        assert_eq!(
            report.outcome(Stage::Compile).unwrap().message,
            "compiler reported: no service URL configured"
        );
    }
}
