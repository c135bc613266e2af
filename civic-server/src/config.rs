use anyhow::{Context, bail};
use shared::OrgCredential;

use crate::store::default_credentials;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | CORS_ORIGIN | http://localhost:8080 | 前端来源 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | SEED_MOCK_DATA | true | 启动时载入演示数据 (true/false, 1/0, yes/no, on/off) |
/// | ORG_CREDENTIALS | university:student,pubworks:password | 组织登录 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// Frontend origin allowed by CORS
    pub cors_origin: String,
    pub request_timeout_ms: u64,
    /// Load the two demo complaints at start-up
    pub seed_mock_data: bool,
    pub org_credentials: Vec<OrgCredential>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置，未设置时使用默认值
    pub fn from_env() -> anyhow::Result<Self> {
        let org_credentials = match std::env::var("ORG_CREDENTIALS") {
            Ok(raw) if !raw.trim().is_empty() => {
                parse_credentials(&raw).context("Invalid ORG_CREDENTIALS")?
            }
            _ => default_credentials(),
        };

        let seed_mock_data = match std::env::var("SEED_MOCK_DATA") {
            Ok(raw) if !raw.trim().is_empty() => parse_flag(&raw)
                .with_context(|| format!("Invalid SEED_MOCK_DATA `{raw}`"))?,
            _ => true,
        };

        Ok(Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
            seed_mock_data,
            org_credentials,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment. Used by tests.
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".into(),
            http_port: 8080,
            cors_origin: "http://localhost:8080".into(),
            request_timeout_ms: 30_000,
            seed_mock_data: true,
            org_credentials: default_credentials(),
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

/// Boolean env flag, case-insensitive: true/1/yes/on or false/0/no/off
fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => bail!("expected true/false, 1/0, yes/no or on/off"),
    }
}

/// Parse `org:password,org:password`
fn parse_credentials(raw: &str) -> anyhow::Result<Vec<OrgCredential>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((org_id, password)) if !org_id.trim().is_empty() => {
                Ok(OrgCredential::new(org_id.trim(), password))
            }
            _ => bail!("expected `orgId:password`, got `{entry}`"),
        })
        .collect()
}
