use crate::config::WhatsAppConfig;
use crate::utils::wa_me_number;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use utoipa::ToSchema;

/// 一次推送的结果。推送失败不算接口错误，而是作为结果的一部分返回。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryResult {
    /// 服务商返回的原始响应
    Delivered { response: String },
    Failed { error: String },
    /// 没有配置 key，需要人工点击链接发送
    NoKey { wa_url: String },
}

impl DeliveryResult {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryResult::Delivered { .. })
    }
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// 给 `contact` 发送 `text`，永远不返回错误
    async fn send(&self, contact: &str, text: &str) -> DeliveryResult;
}

/// 在独立任务里执行推送并等待结果。
///
/// 调用方先完成持久化再调用它；通知任务 panic 时返回 `Failed`，不会影响已提交的数据。
pub async fn deliver(notifier: Arc<dyn Notifier>, contact: String, text: String) -> DeliveryResult {
    let handle = tokio::spawn(async move { notifier.send(&contact, &text).await });
    match handle.await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Notification task aborted: {e}");
            DeliveryResult::Failed {
                error: format!("notification task aborted: {e}"),
            }
        }
    }
}

/// CallMeBot WhatsApp 推送
#[derive(Clone)]
pub struct WhatsAppService {
    client: Client,
    config: WhatsAppConfig,
}

impl WhatsAppService {
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn fallback_link(phone: &str, text: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            wa_me_number(phone),
            urlencoding::encode(text)
        )
    }

    async fn call_provider(&self, phone: &str, text: &str) -> Result<String, DeliveryError> {
        let url = format!(
            "{}/whatsapp.php?phone={}&text={}&apikey={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(phone),
            urlencoding::encode(text),
            urlencoding::encode(self.config.api_key.trim()),
        );

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Notifier for WhatsAppService {
    async fn send(&self, contact: &str, text: &str) -> DeliveryResult {
        if !self.config.has_api_key() {
            let wa_url = Self::fallback_link(contact, text);
            log::info!("No CallMeBot key configured, manual WhatsApp link generated for {contact}");
            return DeliveryResult::NoKey { wa_url };
        }

        match self.call_provider(contact, text).await {
            Ok(response) => {
                log::info!("WhatsApp message sent successfully: {contact}");
                DeliveryResult::Delivered { response }
            }
            Err(e) => {
                log::error!("WhatsApp message failed to send: {contact}, Error: {e}");
                DeliveryResult::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str, api_key: &str) -> WhatsAppConfig {
        WhatsAppConfig {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 1,
            superadmin_phone: "+237680371957".to_string(),
        }
    }

    #[tokio::test]
    async fn test_no_key_returns_fallback_link_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = WhatsAppService::new(config(&server.uri(), ""));
        let result = service
            .send("+237680371957", "⚠️ Double scan détecté pour le billet : ABC123")
            .await;

        match result {
            DeliveryResult::NoKey { wa_url } => {
                assert!(wa_url.starts_with("https://wa.me/237680371957?text="));
                assert!(wa_url.contains("Double%20scan"));
                assert!(wa_url.contains("ABC123"));
                assert!(!wa_url.contains(' '));
            }
            other => panic!("expected fallback link, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delivered_returns_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/whatsapp.php"))
            .and(query_param("phone", "+237680371957"))
            .and(query_param("text", "hello world"))
            .and(query_param("apikey", "k3y"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Message queued"))
            .expect(1)
            .mount(&server)
            .await;

        let service = WhatsAppService::new(config(&server.uri(), "k3y"));
        let result = service.send("+237680371957", "hello world").await;

        assert_eq!(
            result,
            DeliveryResult::Delivered {
                response: "Message queued".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_2xx_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("APIKey is invalid"))
            .mount(&server)
            .await;

        let service = WhatsAppService::new(config(&server.uri(), "k3y"));
        match service.send("+237680371957", "hi").await {
            DeliveryResult::Failed { error } => assert!(error.contains("503")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let service = WhatsAppService::new(config(&server.uri(), "k3y"));
        let result = service.send("+237680371957", "hi").await;
        assert!(matches!(result, DeliveryResult::Failed { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_failure() {
        let service = WhatsAppService::new(config("http://127.0.0.1:9", "k3y"));
        let result = service.send("+237680371957", "hi").await;
        assert!(matches!(result, DeliveryResult::Failed { .. }));
    }

    struct PanickingNotifier;

    #[async_trait]
    impl Notifier for PanickingNotifier {
        async fn send(&self, _contact: &str, _text: &str) -> DeliveryResult {
            panic!("provider client blew up");
        }
    }

    #[tokio::test]
    async fn test_deliver_contains_panics() {
        let result = deliver(
            Arc::new(PanickingNotifier),
            "+237680371957".to_string(),
            "hi".to_string(),
        )
        .await;
        assert!(matches!(result, DeliveryResult::Failed { .. }));
    }

    #[test]
    fn test_delivery_result_serialization() {
        let json = serde_json::to_value(DeliveryResult::NoKey {
            wa_url: "https://wa.me/1?text=x".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "no_key");
        assert_eq!(json["wa_url"], "https://wa.me/1?text=x");
    }
}
