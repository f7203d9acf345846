use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Off-chain issuer key whose signatures authorize mints
    /// (65-byte uncompressed SEC1, as returned by secp256k1 recovery)
    pub issuer_pubkey: Binary,
    /// Prefix for every token URI. Read at query time, so rewriting it
    /// retroactively changes the reported URI of all existing tokens.
    pub base_uri: String,
    pub name: String,
    pub symbol: String,
}

/// Two-step owner transfer state
#[cw_serde]
pub struct PendingOwnerTransfer {
    pub proposed_owner: Addr,
}

/// A minted achievement. Written exactly once per successful mint.
#[cw_serde]
pub struct TokenRecord {
    pub owner: Addr,
    pub descriptor: AchievementDescriptor,
}

/// What is being credentialed. Opaque data: it goes under the issuer's
/// signature and into the token URI, never validated against any registry.
#[cw_serde]
pub enum AchievementDescriptor {
    /// Free-form (integration, task) pair, e.g. ("aave", "deposit")
    IntegrationTask { integration: String, task: String },
    /// Backend-assigned numeric achievement id
    Numeric { achievement_id: u64 },
}

impl AchievementDescriptor {
    /// Append the canonical encoding: one variant tag byte, then u32-BE
    /// length-tagged strings or a fixed-width u64-BE id. Length tags keep
    /// the encoding injective; ("ab","c") and ("a","bc") never collide.
    pub fn write_canonical(&self, buf: &mut Vec<u8>) {
        match self {
            Self::IntegrationTask { integration, task } => {
                buf.push(0x00);
                write_str(buf, integration);
                write_str(buf, task);
            }
            Self::Numeric { achievement_id } => {
                buf.push(0x01);
                buf.extend_from_slice(&achievement_id.to_be_bytes());
            }
        }
    }

    /// Canonical bytes, used as the replay-guard storage key.
    pub fn claim_key(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_canonical(&mut buf);
        buf
    }

    /// URI path segments for a token carrying this descriptor.
    pub fn uri_path(&self, serial: u64) -> String {
        match self {
            Self::IntegrationTask { integration, task } => {
                format!("{}/{}", integration, task)
            }
            Self::Numeric { achievement_id } => format!("{}/{}", achievement_id, serial),
        }
    }

    /// Short form for event attributes.
    pub fn label(&self) -> String {
        match self {
            Self::IntegrationTask { integration, task } => {
                format!("{}/{}", integration, task)
            }
            Self::Numeric { achievement_id } => achievement_id.to_string(),
        }
    }
}

fn write_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_be_bytes());
    buf.extend_from_slice(s.as_bytes());
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Next serial to be allocated; equals the total minted so far
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// serial -> TokenRecord
pub const TOKENS: Map<u64, TokenRecord> = Map::new("tokens");

/// Consumption set: (recipient, canonical descriptor bytes) -> serial.
/// Once a key is present, any further mint attempt for it fails.
pub const CLAIMED: Map<(&Addr, &[u8]), u64> = Map::new("claimed");

/// Secondary index for owner-scoped listing: (owner, serial) -> true
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("owner_tokens");

pub const PENDING_OWNER: Item<PendingOwnerTransfer> = Item::new("pending_owner");
