use cosmwasm_std::{Addr, Api, Deps, MessageInfo};
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::state::{AchievementDescriptor, CONFIG};

/// Domain tag mixed into every signed mint message
pub const MINT_DOMAIN: &[u8] = b"waypoint:mint:v1";

pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// The issuer key must be the 65-byte uncompressed SEC1 form, since that is
/// what secp256k1 recovery returns and the comparison is exact byte equality.
pub fn validate_issuer_pubkey(pubkey: &[u8]) -> Result<(), ContractError> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(ContractError::InvalidIssuerKey {
            length: pubkey.len(),
        });
    }
    Ok(())
}

/// Build the canonical byte encoding of a mint authorization.
/// Layout: domain tag, u32-BE length-tagged recipient address, descriptor
/// encoding. Every field is length-tagged or fixed-width, so no two distinct
/// (recipient, descriptor) tuples serialize to the same bytes.
pub fn canonical_mint_message(recipient: &Addr, descriptor: &AchievementDescriptor) -> Vec<u8> {
    let addr = recipient.as_str();
    let mut buf = Vec::with_capacity(MINT_DOMAIN.len() + 4 + addr.len() + 32);
    buf.extend_from_slice(MINT_DOMAIN);
    buf.extend_from_slice(&(addr.len() as u32).to_be_bytes());
    buf.extend_from_slice(addr.as_bytes());
    descriptor.write_canonical(&mut buf);
    buf
}

/// Sha256 digest of the canonical message, in the 32-byte form the
/// secp256k1 recovery host function expects.
pub fn canonical_mint_digest(recipient: &Addr, descriptor: &AchievementDescriptor) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(canonical_mint_message(recipient, descriptor));
    hasher.finalize().to_vec()
}

/// Recover the signer of `digest` from a 65-byte `r || s || v` signature.
/// Returns the 65-byte uncompressed SEC1 public key. Malformed input of any
/// kind is `InvalidSignature`; there is no default-identity fallback.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8],
    signature: &[u8],
) -> Result<Vec<u8>, ContractError> {
    if signature.len() != 65 {
        return Err(ContractError::InvalidSignature);
    }
    // Ethereum-style tooling emits the recovery byte as 27/28
    let v = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return Err(ContractError::InvalidSignature),
    };
    api.secp256k1_recover_pubkey(digest, &signature[..64], v)
        .map_err(|_| ContractError::InvalidSignature)
}

/// Check that `signature` is the trusted issuer's signature over the
/// canonical (recipient, descriptor) message. A recovered-but-wrong signer
/// is rejected exactly like a tampered message.
pub fn authorize_mint(
    deps: Deps,
    recipient: &Addr,
    descriptor: &AchievementDescriptor,
    signature: &[u8],
) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let digest = canonical_mint_digest(recipient, descriptor);
    let signer = recover_signer(deps.api, &digest, signature)?;
    if signer.as_slice() != config.issuer_pubkey.as_slice() {
        return Err(ContractError::InvalidAuthorization);
    }
    Ok(())
}
