pub mod contract;
pub mod error;
pub mod helpers;
pub mod msg;
pub mod state;

#[cfg(not(feature = "library"))]
mod entry {
    use super::*;
    use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};
    use msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

    #[entry_point]
    pub fn instantiate(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, error::ContractError> {
        contract::instantiate(deps, env, info, msg)
    }

    #[entry_point]
    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, error::ContractError> {
        match msg {
            ExecuteMsg::Mint {
                to,
                descriptor,
                signature,
            } => contract::execute_mint(deps, env, info, to, descriptor, signature),
            ExecuteMsg::SetBaseUri { base_uri } => {
                contract::execute_set_base_uri(deps, env, info, base_uri)
            }
            ExecuteMsg::UpdateIssuerKey { issuer_pubkey } => {
                contract::execute_update_issuer_key(deps, env, info, issuer_pubkey)
            }
            ExecuteMsg::ProposeOwner { new_owner } => {
                contract::execute_propose_owner(deps, env, info, new_owner)
            }
            ExecuteMsg::AcceptOwner {} => contract::execute_accept_owner(deps, env, info),
            ExecuteMsg::CancelOwnerTransfer {} => {
                contract::execute_cancel_owner_transfer(deps, env, info)
            }
        }
    }

    #[entry_point]
    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, error::ContractError> {
        match msg {
            QueryMsg::Config {} => contract::query_config(deps),
            QueryMsg::CurrentId {} => contract::query_current_id(deps),
            QueryMsg::TokenUri { token_id } => contract::query_token_uri(deps, token_id),
            QueryMsg::NftInfo { token_id } => contract::query_nft_info(deps, token_id),
            QueryMsg::OwnerOf { token_id } => contract::query_owner_of(deps, token_id),
            QueryMsg::Claimed {
                recipient,
                descriptor,
            } => contract::query_claimed(deps, recipient, descriptor),
            QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            } => contract::query_tokens(deps, owner, start_after, limit),
            QueryMsg::PendingOwner {} => contract::query_pending_owner(deps),
        }
    }

    #[entry_point]
    pub fn migrate(
        deps: DepsMut,
        env: Env,
        msg: MigrateMsg,
    ) -> Result<Response, error::ContractError> {
        contract::migrate(deps, env, msg)
    }
}
