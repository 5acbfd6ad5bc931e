//! Request bodies for creating and editing webhooks

use crate::{TransactionType, TxnStatus, WebhookType};
use serde::{Deserialize, Serialize};

/// Body of a create call.
///
/// Serialized field-for-field: optional fields left unset are omitted, and
/// the client fills in no defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    #[serde(rename = "webhookURL")]
    pub webhook_url: String,
    pub transaction_types: Vec<TransactionType>,
    pub account_addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_address_owners: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<WebhookType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_status: Option<TxnStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl CreateWebhookRequest {
    pub fn new<T, A>(
        webhook_url: impl Into<String>,
        transaction_types: impl IntoIterator<Item = T>,
        account_addresses: impl IntoIterator<Item = A>,
    ) -> Self
    where
        T: Into<TransactionType>,
        A: Into<String>,
    {
        Self {
            webhook_url: webhook_url.into(),
            transaction_types: transaction_types.into_iter().map(Into::into).collect(),
            account_addresses: account_addresses.into_iter().map(Into::into).collect(),
            account_address_owners: None,
            webhook_type: None,
            auth_header: None,
            txn_status: None,
            encoding: None,
        }
    }

    pub fn with_webhook_type(mut self, webhook_type: WebhookType) -> Self {
        self.webhook_type = Some(webhook_type);
        self
    }

    pub fn with_auth_header(mut self, auth_header: impl Into<String>) -> Self {
        self.auth_header = Some(auth_header.into());
        self
    }

    pub fn with_txn_status(mut self, txn_status: TxnStatus) -> Self {
        self.txn_status = Some(txn_status);
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_account_address_owners<A: Into<String>>(
        mut self,
        owners: impl IntoIterator<Item = A>,
    ) -> Self {
        self.account_address_owners = Some(owners.into_iter().map(Into::into).collect());
        self
    }
}

/// The fields to change in an edit call. Unset fields keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditWebhookRequest {
    #[serde(rename = "webhookURL", default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_types: Option<Vec<TransactionType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_address_owners: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<WebhookType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_status: Option<TxnStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl EditWebhookRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    pub fn transaction_types<T: Into<TransactionType>>(
        mut self,
        types: impl IntoIterator<Item = T>,
    ) -> Self {
        self.transaction_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the whole address list. See
    /// [`crate::WebhookClient::append_addresses`] to add to it instead.
    pub fn account_addresses<A: Into<String>>(mut self, addresses: impl IntoIterator<Item = A>) -> Self {
        self.account_addresses = Some(addresses.into_iter().map(Into::into).collect());
        self
    }

    pub fn account_address_owners<A: Into<String>>(
        mut self,
        owners: impl IntoIterator<Item = A>,
    ) -> Self {
        self.account_address_owners = Some(owners.into_iter().map(Into::into).collect());
        self
    }

    pub fn webhook_type(mut self, webhook_type: WebhookType) -> Self {
        self.webhook_type = Some(webhook_type);
        self
    }

    pub fn auth_header(mut self, auth_header: impl Into<String>) -> Self {
        self.auth_header = Some(auth_header.into());
        self
    }

    pub fn txn_status(mut self, txn_status: TxnStatus) -> Self {
        self.txn_status = Some(txn_status);
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// True when no field is set; merging such a request changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = CreateWebhookRequest::new(
            "https://example.com/hook",
            [TransactionType::NftSale],
            ["addr1"],
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "webhookURL": "https://example.com/hook",
                "transactionTypes": ["NFT_SALE"],
                "accountAddresses": ["addr1"]
            })
        );
    }

    #[test]
    fn test_create_request_optional_fields() {
        let request = CreateWebhookRequest::new("https://example.com/hook", ["ANY"], ["addr1"])
            .with_webhook_type(WebhookType::RawDevnet)
            .with_auth_header("Bearer t")
            .with_txn_status(TxnStatus::Failed);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["webhookType"], "rawDevnet");
        assert_eq!(value["authHeader"], "Bearer t");
        assert_eq!(value["txnStatus"], "failed");
        assert_eq!(value["transactionTypes"], json!(["ANY"]));
        assert!(value.get("encoding").is_none());
    }

    #[test]
    fn test_edit_request_serializes_only_set_fields() {
        let edit = EditWebhookRequest::new().auth_header("secret");
        assert_eq!(
            serde_json::to_value(&edit).unwrap(),
            json!({"authHeader": "secret"})
        );
        assert!(!edit.is_empty());
        assert!(EditWebhookRequest::new().is_empty());
    }
}
