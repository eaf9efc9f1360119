//! Azure Resource Manager client.
//!
//! Implements [`ManagementClient`] over the `Microsoft.EventHub` REST API
//! with a blocking HTTP client. Requests time out after the context's
//! timeout, which defaults to `LONG_RUNNING_OPERATION_TIMEOUT`.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::ManagementClient;
use crate::core::constants::PROVIDER;
use crate::core::context::ExecutionContext;
use crate::core::domain::{
    AccessRight, AuthorizationRuleAttributes, AuthorizationRuleReference, ConsumerGroupAttributes,
    EventHubAttributes, KeyRegenerationRequest, NamespaceAttributes, NamespaceIdentifier,
    NamespaceUpdate, ResourceKeys, Sku,
};
use crate::core::types::TagMap;
use crate::error::{ClientError, ConfigError, Result};

/// Blocking ARM client scoped to one subscription.
pub struct ArmClient {
    http: Client,
    endpoint: Url,
    subscription_id: String,
    api_version: String,
    token: Zeroizing<String>,
}

impl std::fmt::Debug for ArmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArmClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("subscription_id", &self.subscription_id)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl ArmClient {
    /// Build a client from an execution context. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unusable endpoint, or
    /// `ClientError::Transport` if the HTTP client cannot be created.
    pub fn new(context: &ExecutionContext) -> Result<Self> {
        let endpoint = Url::parse(context.endpoint()).map_err(|e| ConfigError::InvalidValue {
            field: "endpoint",
            reason: e.to_string(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: format!("not a base URL: {}", endpoint),
            }
            .into());
        }

        let http = Client::builder()
            .timeout(context.timeout())
            .user_agent(concat!("hubkeys/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            http,
            endpoint,
            subscription_id: context.subscription_id().to_string(),
            api_version: context.api_version().to_string(),
            token: Zeroizing::new(context.access_token().to_string()),
        })
    }

    /// URL of a namespace, or of a child resource when `tail` is non-empty.
    fn namespace_url(&self, namespace: &NamespaceIdentifier, tail: &[&str]) -> Url {
        let head = [
            "subscriptions",
            self.subscription_id.as_str(),
            "resourceGroups",
            namespace.resource_group(),
            "providers",
            PROVIDER,
            "namespaces",
            namespace.namespace_name(),
        ];

        let mut url = self.endpoint.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(head.iter().chain(tail));
        }
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);
        url
    }

    /// Send a request and decode a successful JSON response.
    fn call<T: DeserializeOwned>(&self, request: RequestBuilder, resource: &str) -> Result<T> {
        let response = request
            .bearer_auth(self.token.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let body = response.text().map_err(ClientError::Transport)?;
        debug!(status = status.as_u16(), resource, "management response");

        decode_response(status.as_u16(), &body, resource)
    }

    fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        resource: &str,
    ) -> Result<T> {
        trace!(method = %method, url = %url, "management request");
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.call(request, resource)
    }
}

impl ManagementClient for ArmClient {
    fn regenerate_keys(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleReference,
        request: &KeyRegenerationRequest,
    ) -> Result<ResourceKeys> {
        let url = self.namespace_url(
            namespace,
            &["authorizationRules", rule.rule_name(), "regenerateKeys"],
        );
        self.send(
            Method::POST,
            url,
            Some(request),
            &format!("authorization rule {} on {}", rule, namespace),
        )
    }

    fn list_keys(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleReference,
    ) -> Result<ResourceKeys> {
        let url = self.namespace_url(
            namespace,
            &["authorizationRules", rule.rule_name(), "listKeys"],
        );
        self.send::<(), _>(
            Method::POST,
            url,
            None,
            &format!("authorization rule {} on {}", rule, namespace),
        )
    }

    fn create_or_update_authorization_rule(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleAttributes,
    ) -> Result<AuthorizationRuleAttributes> {
        let url = self.namespace_url(namespace, &["authorizationRules", &rule.name]);
        let body = Envelope {
            properties: RuleProperties {
                rights: rule.rights.clone(),
            },
        };
        let resource: Resource<RuleProperties> = self.send(
            Method::PUT,
            url,
            Some(&body),
            &format!("authorization rule {} on {}", rule.name, namespace),
        )?;

        Ok(AuthorizationRuleAttributes {
            id: resource.id,
            name: or_requested(resource.name, &rule.name),
            rights: resource.properties.rights,
        })
    }

    fn create_or_update_event_hub(
        &self,
        namespace: &NamespaceIdentifier,
        event_hub: &EventHubAttributes,
    ) -> Result<EventHubAttributes> {
        let url = self.namespace_url(namespace, &["eventhubs", &event_hub.name]);
        let body = Envelope {
            properties: EventHubProperties {
                message_retention_in_days: event_hub.message_retention_in_days,
                partition_count: event_hub.partition_count,
                ..Default::default()
            },
        };
        let resource: Resource<EventHubProperties> = self.send(
            Method::PUT,
            url,
            Some(&body),
            &format!("event hub {} on {}", event_hub.name, namespace),
        )?;

        Ok(EventHubAttributes {
            id: resource.id,
            name: or_requested(resource.name, &event_hub.name),
            partition_count: resource.properties.partition_count,
            message_retention_in_days: resource.properties.message_retention_in_days,
            status: resource.properties.status,
            partition_ids: resource.properties.partition_ids,
        })
    }

    fn create_or_update_consumer_group(
        &self,
        namespace: &NamespaceIdentifier,
        event_hub: &str,
        group: &ConsumerGroupAttributes,
    ) -> Result<ConsumerGroupAttributes> {
        let url = self.namespace_url(
            namespace,
            &["eventhubs", event_hub, "consumergroups", &group.name],
        );
        let body = Envelope {
            properties: ConsumerGroupProperties {
                user_metadata: group.user_metadata.clone(),
            },
        };
        let resource: Resource<ConsumerGroupProperties> = self.send(
            Method::PUT,
            url,
            Some(&body),
            &format!("consumer group {} of {} on {}", group.name, event_hub, namespace),
        )?;

        Ok(ConsumerGroupAttributes {
            id: resource.id,
            name: or_requested(resource.name, &group.name),
            event_hub_name: Some(event_hub.to_string()),
            user_metadata: resource.properties.user_metadata,
        })
    }

    fn update_namespace(
        &self,
        namespace: &NamespaceIdentifier,
        update: &NamespaceUpdate,
    ) -> Result<NamespaceAttributes> {
        let url = self.namespace_url(namespace, &[]);
        let resource: Resource<serde_json::Value> = self.send(
            Method::PATCH,
            url,
            Some(update),
            &format!("namespace {}", namespace),
        )?;

        Ok(NamespaceAttributes {
            id: resource.id,
            name: or_requested(resource.name, namespace.namespace_name()),
            location: resource.location,
            sku: resource.sku,
            tags: resource.tags,
        })
    }
}

/// Request body wrapper: ARM puts resource settings under `properties`.
#[derive(Serialize)]
struct Envelope<P> {
    properties: P,
}

/// Response shape shared by every ARM resource.
#[derive(Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + Default"))]
struct Resource<P> {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    sku: Option<Sku>,
    #[serde(default)]
    tags: Option<TagMap>,
    #[serde(default)]
    properties: P,
}

#[derive(Default, Serialize, Deserialize)]
struct RuleProperties {
    #[serde(default)]
    rights: Vec<AccessRight>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventHubProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message_retention_in_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    partition_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    partition_ids: Vec<String>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConsumerGroupProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_metadata: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Name from the response, or the requested one when the service sent none.
fn or_requested(returned: String, requested: &str) -> String {
    if returned.is_empty() {
        requested.to_string()
    } else {
        returned
    }
}

/// Decode a response body, or map a failure status to a `ClientError`.
///
/// `202 Accepted` and `204 No Content` may arrive without a body; they decode
/// as an empty object so every field takes its default.
fn decode_response<T: DeserializeOwned>(status: u16, body: &str, resource: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body, resource).into());
    }

    let body = if body.trim().is_empty() && matches!(status, 202 | 204) {
        debug!(status, resource, "accepted without a body");
        "{}"
    } else {
        body
    };

    serde_json::from_str(body)
        .map_err(|e| ClientError::Decode(format!("{}: {}", resource, e)).into())
}

/// Map a non-success status and body to a `ClientError`.
///
/// The service's error code and message are kept in every variant.
fn status_error(status: u16, body: &str, resource: &str) -> ClientError {
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (String::new(), body.trim().to_string()),
    };
    let reported = match (code.is_empty(), message.is_empty()) {
        (true, true) => None,
        (true, false) => Some(message.clone()),
        (false, true) => Some(code.clone()),
        (false, false) => Some(format!("{}: {}", code, message)),
    };
    let about_resource = match &reported {
        Some(detail) => format!("{}: {}", resource, detail),
        None => resource.to_string(),
    };

    match status {
        401 | 403 => ClientError::Unauthorized(reported.unwrap_or(about_resource)),
        404 => ClientError::NotFound(about_resource),
        409 => ClientError::Conflict(about_resource),
        _ => ClientError::Service {
            status,
            code: if code.is_empty() {
                "Unknown".to_string()
            } else {
                code
            },
            message: if message.is_empty() {
                resource.to_string()
            } else {
                message
            },
        },
    }
}
