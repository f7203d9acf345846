use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

use crate::state::AchievementDescriptor;

#[cw_serde]
pub struct InstantiateMsg {
    /// Prefix for all token URIs, e.g. "example.com"
    pub base_uri: String,
    /// Issuer secp256k1 public key (65-byte uncompressed SEC1)
    pub issuer_pubkey: Binary,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Redeem an issuer-signed authorization: mints the next serial to `to`.
    /// Anyone holding the signature may submit it; the token always goes to
    /// the recipient named inside the signed message.
    Mint {
        to: String,
        descriptor: AchievementDescriptor,
        signature: Binary,
    },
    /// Replace the URI prefix for every token, past and future (owner only)
    SetBaseUri { base_uri: String },
    /// Rotate the trusted issuer key (owner only)
    UpdateIssuerKey { issuer_pubkey: Binary },
    /// Step 1: propose a new owner (owner only)
    ProposeOwner { new_owner: String },
    /// Step 2: new owner accepts the role
    AcceptOwner {},
    /// Cancel a pending owner transfer (owner only)
    CancelOwnerTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Next serial to be allocated
    #[returns(CurrentIdResponse)]
    CurrentId {},
    /// URI for a minted token, derived from the current base URI
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },
    /// Full token info (owner + descriptor + live URI)
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u64 },
    /// Get owner of a token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Whether (recipient, descriptor) has already been consumed
    #[returns(ClaimedResponse)]
    Claimed {
        recipient: String,
        descriptor: AchievementDescriptor,
    },
    /// Serials owned by an address
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Get pending owner transfer info
    #[returns(Option<crate::state::PendingOwnerTransfer>)]
    PendingOwner {},
}

#[cw_serde]
pub struct CurrentIdResponse {
    pub current_id: u64,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: u64,
    pub owner: String,
    pub descriptor: AchievementDescriptor,
    pub token_uri: String,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct ClaimedResponse {
    pub claimed: bool,
    pub token_id: Option<u64>,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct MigrateMsg {}
