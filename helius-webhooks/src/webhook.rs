//! Webhook resource model

use crate::EditWebhookRequest;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Largest number of account addresses a single webhook may watch.
pub const MAX_ADDRESSES_PER_WEBHOOK: usize = 10_000;

/// Message of the validation error raised when an append would overflow
/// [`MAX_ADDRESSES_PER_WEBHOOK`].
pub const ADDRESS_CAPACITY_MESSAGE: &str =
    "a single webhook cannot contain more than 10,000 addresses";

/// A webhook as stored by the API.
///
/// Values of this type are snapshots: the server owns the resource, and a
/// copy is only meaningful for the call that fetched it. Fields the server
/// sends that are not modelled here are kept in `extra` and written back
/// unchanged on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(rename = "webhookID")]
    pub webhook_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Where matching events are delivered.
    #[serde(rename = "webhookURL")]
    pub webhook_url: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_types: Vec<TransactionType>,

    /// Watched accounts, in the order they were added.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_addresses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_address_owners: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<WebhookType>,

    /// Value the API puts in the `Authorization` header of deliveries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_status: Option<TxnStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Webhook {
    /// Shallow merge: every field set on `edit` replaces the stored value,
    /// everything else is kept.
    pub fn merged_with(mut self, edit: &EditWebhookRequest) -> Self {
        if let Some(url) = &edit.webhook_url {
            self.webhook_url = url.clone();
        }
        if let Some(types) = &edit.transaction_types {
            self.transaction_types = types.clone();
        }
        if let Some(addresses) = &edit.account_addresses {
            self.account_addresses = addresses.clone();
        }
        if let Some(owners) = &edit.account_address_owners {
            self.account_address_owners = Some(owners.clone());
        }
        if let Some(webhook_type) = &edit.webhook_type {
            self.webhook_type = Some(webhook_type.clone());
        }
        if let Some(auth_header) = &edit.auth_header {
            self.auth_header = Some(auth_header.clone());
        }
        if let Some(txn_status) = &edit.txn_status {
            self.txn_status = Some(txn_status.clone());
        }
        if let Some(encoding) = &edit.encoding {
            self.encoding = Some(encoding.clone());
        }
        self
    }

    /// Append addresses after the existing ones. Duplicates are kept.
    pub fn extend_addresses<I, S>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.account_addresses
            .extend(addresses.into_iter().map(Into::into));
    }

    /// Drop every occurrence of each given address, keeping the order of the
    /// rest. Returns how many entries were removed.
    pub fn remove_addresses<S: AsRef<str>>(&mut self, addresses: &[S]) -> usize {
        let before = self.account_addresses.len();
        self.account_addresses
            .retain(|existing| !addresses.iter().any(|a| a.as_ref() == existing));
        before - self.account_addresses.len()
    }

    pub fn exceeds_address_capacity(&self) -> bool {
        self.account_addresses.len() > MAX_ADDRESSES_PER_WEBHOOK
    }
}

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        ///
        /// Values this client does not know are carried as `Other` and
        /// serialized back verbatim.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(name) => name.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                match name.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(name),
                }
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::from(name.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(name) => name,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

open_enum! {
    /// Delivery format of a webhook.
    pub enum WebhookType {
        /// Parsed, human-readable transactions.
        Enhanced => "enhanced",
        /// Raw transactions as seen on chain.
        Raw => "raw",
        /// Messages posted to a Discord channel.
        Discord => "discord",
        EnhancedDevnet => "enhancedDevnet",
        RawDevnet => "rawDevnet",
        DiscordDevnet => "discordDevnet",
    }
}

open_enum! {
    /// Which transactions, by outcome, trigger a delivery.
    pub enum TxnStatus {
        All => "all",
        Success => "success",
        Failed => "failed",
    }
}

impl Default for TxnStatus {
    fn default() -> Self {
        Self::All
    }
}

open_enum! {
    /// Transaction category a webhook filters on.
    ///
    /// The API defines many categories and adds new ones over time.
    pub enum TransactionType {
        Any => "ANY",
        Unknown => "UNKNOWN",
        NftBid => "NFT_BID",
        NftBidCancelled => "NFT_BID_CANCELLED",
        NftListing => "NFT_LISTING",
        NftCancelListing => "NFT_CANCEL_LISTING",
        NftSale => "NFT_SALE",
        NftMint => "NFT_MINT",
        NftAuctionCreated => "NFT_AUCTION_CREATED",
        NftAuctionUpdated => "NFT_AUCTION_UPDATED",
        NftAuctionCancelled => "NFT_AUCTION_CANCELLED",
        NftParticipationReward => "NFT_PARTICIPATION_REWARD",
        NftMintRejected => "NFT_MINT_REJECTED",
        CompressedNftMint => "COMPRESSED_NFT_MINT",
        CompressedNftTransfer => "COMPRESSED_NFT_TRANSFER",
        CompressedNftBurn => "COMPRESSED_NFT_BURN",
        Swap => "SWAP",
        Transfer => "TRANSFER",
        Burn => "BURN",
        BurnNft => "BURN_NFT",
        TokenMint => "TOKEN_MINT",
        AddLiquidity => "ADD_LIQUIDITY",
        WithdrawLiquidity => "WITHDRAW_LIQUIDITY",
        StakeSol => "STAKE_SOL",
        UnstakeSol => "UNSTAKE_SOL",
        InitSwap => "INIT_SWAP",
        CancelSwap => "CANCEL_SWAP",
        Loan => "LOAN",
        RepayLoan => "REPAY_LOAN",
    }
}

/// Lists the server sends as `null` decode as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
