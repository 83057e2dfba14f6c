//! Full round trip through the reference bridge.
//!
//! One multi-test app plays both chains: `BOND` is the root token locked by
//! the vault, `cBOND` is its child-side mapping minted to the child harvester
//! when the deposit syncs. The child harvester burns it, and the exit releases
//! the locked `BOND` to the root harvester and on to the beneficiary.

use bridge_mocks::msg::{
    ExitPayload, ManagerExecuteMsg, ManagerInstantiateMsg, PredicateInstantiateMsg,
};
use common::ChainRole;
use cosmwasm_std::{to_json_binary, Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

/// 1000 tokens with 18 decimals
const VALUE: u128 = 1_000_000_000_000_000_000_000;

fn contract_vault() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            community_vault::contract::execute,
            community_vault::contract::instantiate,
            community_vault::contract::query,
        )
        .with_reply(community_vault::contract::reply),
    )
}

fn contract_harvester() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            token_harvester::contract::execute,
            token_harvester::contract::instantiate,
            token_harvester::contract::query,
        )
        .with_reply(token_harvester::contract::reply),
    )
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

fn contract_manager() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        bridge_mocks::root_chain_manager::execute,
        bridge_mocks::root_chain_manager::instantiate,
        bridge_mocks::root_chain_manager::query,
    ))
}

fn contract_predicate() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        bridge_mocks::predicate::execute,
        bridge_mocks::predicate::instantiate,
        bridge_mocks::predicate::query,
    ))
}

fn instantiate_token(
    app: &mut App,
    code_id: u64,
    minter: &Addr,
    symbol: &str,
    initial: u128,
) -> Addr {
    app.instantiate_contract(
        code_id,
        minter.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{symbol} Token"),
            symbol: symbol.to_string(),
            decimals: 18,
            initial_balances: vec![Cw20Coin {
                address: minter.to_string(),
                amount: Uint128::new(initial),
            }],
            mint: Some(MinterResponse {
                minter: minter.to_string(),
                cap: None,
            }),
            marketing: None,
        },
        &[],
        symbol.to_lowercase(),
        None,
    )
    .unwrap()
}

fn balance(app: &App, token: &Addr, holder: &Addr) -> u128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

fn attr_of(res: &AppResponse, contract: &Addr, action: &str, key: &str) -> String {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .filter(|e| {
            e.attributes
                .iter()
                .any(|a| a.key == "_contract_address" && a.value == contract.as_str())
        })
        .find(|e| {
            e.attributes
                .iter()
                .any(|a| a.key == "action" && a.value == action)
        })
        .and_then(|e| e.attributes.iter().find(|a| a.key == key))
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("{action}.{key} not emitted by {contract}"))
}

#[test]
fn test_vault_to_child_and_back_to_beneficiary() {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let keeper = Addr::unchecked("terra1keeper");
    let beneficiary = Addr::unchecked("terra1beneficiary");

    // Root side: token, bridge, vault
    let cw20_code_id = app.store_code(contract_cw20());
    let root_token = instantiate_token(&mut app, cw20_code_id, &owner, "BOND", VALUE);

    let manager_code_id = app.store_code(contract_manager());
    let predicate_code_id = app.store_code(contract_predicate());
    let manager = app
        .instantiate_contract(
            manager_code_id,
            owner.clone(),
            &ManagerInstantiateMsg {},
            &[],
            "root-chain-manager",
            None,
        )
        .unwrap();
    let predicate = app
        .instantiate_contract(
            predicate_code_id,
            owner.clone(),
            &PredicateInstantiateMsg {
                manager: manager.to_string(),
            },
            &[],
            "erc20-predicate",
            None,
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        manager.clone(),
        &ManagerExecuteMsg::SetPredicate {
            predicate: predicate.to_string(),
        },
        &[],
    )
    .unwrap();

    let vault_code_id = app.store_code(contract_vault());
    let vault = app
        .instantiate_contract(
            vault_code_id,
            owner.clone(),
            &community_vault::msg::InstantiateMsg {
                owner: None,
                role: ChainRole::Root,
            },
            &[],
            "community-vault",
            None,
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        vault.clone(),
        &community_vault::msg::ExecuteMsg::Initialize {
            token: root_token.to_string(),
            bridge_manager: Some(manager.to_string()),
            predicate: Some(predicate.to_string()),
        },
        &[],
    )
    .unwrap();

    // Harvesters on both sides
    let harvester_code_id = app.store_code(contract_harvester());
    let mut harvester = |role: ChainRole, bridge_manager: Option<&Addr>| {
        let addr = app
            .instantiate_contract(
                harvester_code_id,
                owner.clone(),
                &token_harvester::msg::InstantiateMsg { owner: None, role },
                &[],
                format!("token-harvester-{role}"),
                None,
            )
            .unwrap();
        app.execute_contract(
            owner.clone(),
            addr.clone(),
            &token_harvester::msg::ExecuteMsg::Initialize {
                bridge_manager: bridge_manager.map(Addr::to_string),
                beneficiary: beneficiary.to_string(),
                withdraw_cooldown: Some(0),
            },
            &[],
        )
        .unwrap();
        addr
    };
    let root_harvester = harvester(ChainRole::Root, Some(&manager));
    let child_harvester = harvester(ChainRole::Child, None);

    // 1. Community funds leave the root vault for the child chain
    app.execute_contract(
        owner.clone(),
        root_token.clone(),
        &Cw20ExecuteMsg::Transfer {
            recipient: vault.to_string(),
            amount: Uint128::new(VALUE),
        },
        &[],
    )
    .unwrap();
    let res = app
        .execute_contract(
            keeper.clone(),
            vault.clone(),
            &community_vault::msg::ExecuteMsg::TransferToChild {},
            &[],
        )
        .unwrap();
    let synced: u128 = attr_of(&res, &vault, "transfer_to_child", "amount")
        .parse()
        .unwrap();
    assert_eq!(synced, VALUE);
    assert_eq!(balance(&app, &root_token, &predicate), VALUE);

    // 2. State sync credits the child harvester with the mapped token
    let child_token = instantiate_token(&mut app, cw20_code_id, &owner, "cBOND", VALUE);
    app.execute_contract(
        owner.clone(),
        child_token.clone(),
        &Cw20ExecuteMsg::Mint {
            recipient: child_harvester.to_string(),
            amount: Uint128::new(synced),
        },
        &[],
    )
    .unwrap();

    // 3. Child harvester burns toward root
    let res = app
        .execute_contract(
            keeper.clone(),
            child_harvester.clone(),
            &token_harvester::msg::ExecuteMsg::WithdrawOnChild {
                token: child_token.to_string(),
            },
            &[],
        )
        .unwrap();
    let burned: u128 = attr_of(&res, &child_harvester, "withdraw_on_child", "amount")
        .parse()
        .unwrap();
    assert_eq!(burned, VALUE);
    assert_eq!(balance(&app, &child_token, &child_harvester), 0);

    // 4. The checkpointed burn is relayed on root and forwarded to the beneficiary
    let exit_proof = to_json_binary(&ExitPayload {
        withdrawer: root_harvester.to_string(),
        root_token: root_token.to_string(),
        amount: Uint128::new(burned),
        nonce: 1,
    })
    .unwrap();
    app.execute_contract(
        keeper.clone(),
        root_harvester.clone(),
        &token_harvester::msg::ExecuteMsg::WithdrawAndTransferToOwner {
            exit_proof,
            token: root_token.to_string(),
        },
        &[],
    )
    .unwrap();

    assert_eq!(balance(&app, &root_token, &beneficiary), VALUE);
    assert_eq!(balance(&app, &root_token, &predicate), 0);
    assert_eq!(balance(&app, &root_token, &root_harvester), 0);
    assert_eq!(balance(&app, &root_token, &vault), 0);
    assert_eq!(balance(&app, &root_token, &keeper), 0);
}
