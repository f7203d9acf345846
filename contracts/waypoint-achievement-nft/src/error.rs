use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("malformed signature")]
    InvalidSignature,

    #[error("invalid signature")]
    InvalidAuthorization,

    #[error("already minted: {recipient} already holds this achievement as token {token_id}")]
    AlreadyMinted { recipient: String, token_id: u64 },

    #[error("unknown token id: {token_id}")]
    UnknownToken { token_id: u64 },

    #[error("invalid issuer public key: {length} bytes (expected 65-byte uncompressed SEC1)")]
    InvalidIssuerKey { length: usize },

    #[error("no owner transfer pending")]
    NoOwnerTransferPending,

    #[error("caller is not the pending owner")]
    NotPendingOwner,

    #[error("owner transfer already pending")]
    OwnerTransferAlreadyPending,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
