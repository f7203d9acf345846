use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{assert_owner, authorize_mint, reject_funds, validate_issuer_pubkey};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:waypoint-achievement-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_issuer_pubkey(&msg.issuer_pubkey)?;

    // The deploying caller is the admin; the issuer key is its off-chain signer
    let config = Config {
        owner: info.sender,
        issuer_pubkey: msg.issuer_pubkey,
        base_uri: msg.base_uri,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("base_uri", &config.base_uri))
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    to: String,
    descriptor: AchievementDescriptor,
    signature: Binary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let recipient = deps.api.addr_validate(&to)?;

    // Every check runs before any write; a failed mint leaves no trace
    authorize_mint(deps.as_ref(), &recipient, &descriptor, &signature)?;

    let claim_key = descriptor.claim_key();
    if let Some(token_id) = CLAIMED.may_load(deps.storage, (&recipient, claim_key.as_slice()))? {
        return Err(ContractError::AlreadyMinted {
            recipient: recipient.to_string(),
            token_id,
        });
    }

    let serial = TOKEN_COUNT.load(deps.storage)?;
    let record = TokenRecord {
        owner: recipient.clone(),
        descriptor: descriptor.clone(),
    };
    TOKENS.save(deps.storage, serial, &record)?;
    CLAIMED.save(deps.storage, (&recipient, claim_key.as_slice()), &serial)?;
    OWNER_TOKENS.save(deps.storage, (&recipient, serial), &true)?;
    TOKEN_COUNT.save(deps.storage, &(serial + 1))?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", serial.to_string())
        .add_attribute("to", recipient.as_str())
        .add_attribute("achievement", descriptor.label()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_set_base_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.base_uri = base_uri.clone();
        Ok(c)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri))
}

pub fn execute_update_issuer_key(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    issuer_pubkey: Binary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;
    validate_issuer_pubkey(&issuer_pubkey)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.issuer_pubkey = issuer_pubkey.clone();
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "update_issuer_key"))
}

// ─── Execute: Owner Transfer (two-step) ─────────────────────────────────────

pub fn execute_propose_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    if PENDING_OWNER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::OwnerTransferAlreadyPending);
    }

    let proposed = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(
        deps.storage,
        &PendingOwnerTransfer {
            proposed_owner: proposed.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_attribute("proposed_owner", proposed.as_str()))
}

pub fn execute_accept_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoOwnerTransferPending)?;

    if info.sender != pending.proposed_owner {
        return Err(ContractError::NotPendingOwner);
    }

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.owner = pending.proposed_owner.clone();
        Ok(c)
    })?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("new_owner", pending.proposed_owner.as_str()))
}

pub fn execute_cancel_owner_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    if PENDING_OWNER.may_load(deps.storage)?.is_none() {
        return Err(ContractError::NoOwnerTransferPending);
    }

    PENDING_OWNER.remove(deps.storage);
    Ok(Response::new().add_attribute("action", "cancel_owner_transfer"))
}

// ─── Queries ────────────────────────────────────────────────────────────────

fn load_token(deps: Deps, token_id: u64) -> Result<TokenRecord, ContractError> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::UnknownToken { token_id })
}

pub fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    Ok(to_json_binary(&CONFIG.load(deps.storage)?)?)
}

pub fn query_current_id(deps: Deps) -> Result<Binary, ContractError> {
    let current_id = TOKEN_COUNT.load(deps.storage)?;
    Ok(to_json_binary(&CurrentIdResponse { current_id })?)
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = load_token(deps, token_id)?;
    let config = CONFIG.load(deps.storage)?;
    let token_uri = format!(
        "{}/{}",
        config.base_uri,
        token.descriptor.uri_path(token_id)
    );
    Ok(to_json_binary(&TokenUriResponse { token_uri })?)
}

pub fn query_nft_info(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = load_token(deps, token_id)?;
    let config = CONFIG.load(deps.storage)?;
    let token_uri = format!(
        "{}/{}",
        config.base_uri,
        token.descriptor.uri_path(token_id)
    );

    Ok(to_json_binary(&NftInfoResponse {
        token_id,
        owner: token.owner.to_string(),
        descriptor: token.descriptor,
        token_uri,
    })?)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = load_token(deps, token_id)?;
    Ok(to_json_binary(&OwnerOfResponse {
        owner: token.owner.to_string(),
    })?)
}

pub fn query_claimed(
    deps: Deps,
    recipient: String,
    descriptor: AchievementDescriptor,
) -> Result<Binary, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let claim_key = descriptor.claim_key();
    let token_id = CLAIMED.may_load(deps.storage, (&recipient, claim_key.as_slice()))?;

    Ok(to_json_binary(&ClaimedResponse {
        claimed: token_id.is_some(),
        token_id,
    })?)
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(cw_storage_plus::Bound::exclusive);

    let tokens: Vec<u64> = OWNER_TOKENS
        .prefix(&owner_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|k| k.ok())
        .collect();

    Ok(to_json_binary(&TokensResponse { tokens })?)
}

pub fn query_pending_owner(deps: Deps) -> Result<Binary, ContractError> {
    Ok(to_json_binary(&PENDING_OWNER.may_load(deps.storage)?)?)
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
