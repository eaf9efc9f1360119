//! Update the SKU and tags of a namespace.

use serde::Serialize;
use tracing::info;

use super::{Command, Services};
use crate::core::client::ManagementClient;
use crate::core::constants::limits;
use crate::core::domain::{NamespaceIdentifier, NamespaceUpdate, Sku};
use crate::core::parse::parse_sku;
use crate::core::tags::TagCodec;
use crate::core::types::LooseTagMap;
use crate::core::validation::check_range;
use crate::error::{Result, ValidationError};

/// Arguments of `set-namespace`.
#[derive(Debug, Clone, Default)]
pub struct SetNamespace {
    pub resource_group: String,
    pub namespace_name: String,
    pub sku: Option<String>,
    pub capacity: Option<i64>,
    /// Tags as a JSON object; `null` values are stored as empty strings.
    pub tags: Option<String>,
}

#[derive(Debug)]
pub struct Prepared {
    namespace: NamespaceIdentifier,
    update: NamespaceUpdate,
    codec: TagCodec,
}

/// Namespace as emitted to the caller, tags in loose form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<LooseTagMap>,
}

impl Command for SetNamespace {
    type Request = Prepared;
    type Output = NamespaceView;

    const NAME: &'static str = "set-namespace";

    fn prepare(&self, services: &Services) -> Result<Prepared> {
        let namespace = NamespaceIdentifier::new(&self.resource_group, &self.namespace_name)?;

        let sku = match (&self.sku, self.capacity) {
            (Some(raw), capacity) => {
                check_range("capacity", capacity, limits::SKU_CAPACITY)?;
                Some(Sku::new(parse_sku(raw)?, capacity))
            }
            (None, Some(_)) => {
                return Err(ValidationError::MissingField { field: "sku" }.into());
            }
            (None, None) => None,
        };

        let loose = match &self.tags {
            Some(raw) => Some(services.tags.parse_loose(raw)?),
            None => None,
        };
        let tags = services.tags.to_strict_map(loose.as_ref())?;

        if sku.is_none() && tags.is_none() {
            return Err(ValidationError::NothingToUpdate.into());
        }

        Ok(Prepared {
            namespace,
            update: NamespaceUpdate { sku, tags },
            codec: services.tags,
        })
    }

    fn send(&self, prepared: Prepared, client: &dyn ManagementClient) -> Result<NamespaceView> {
        info!(
            namespace = %prepared.namespace,
            sku = ?prepared.update.sku.as_ref().map(|s| s.name.as_str()),
            tags = ?prepared.update.tags.as_ref().map(|t| t.len()),
            "updating namespace"
        );
        let updated = client.update_namespace(&prepared.namespace, &prepared.update)?;

        Ok(NamespaceView {
            tags: prepared.codec.to_loose_map(updated.tags.as_ref()),
            id: updated.id,
            name: updated.name,
            location: updated.location,
            sku: updated.sku,
        })
    }
}
