//! CW20 helpers shared by the custody contracts.

use std::cmp::Ordering;

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

pub fn query_balance(querier: &QuerierWrapper, token: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn query_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Uint128> {
    let res: AllowanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;
    Ok(res.allowance)
}

/// Build the message that moves an allowance from `current` to exactly `target`.
///
/// CW20 only exposes relative updates, so this emits the increase or decrease
/// for the difference. Returns `None` when the allowance already matches.
pub fn set_allowance_msg(
    token: &Addr,
    spender: &Addr,
    current: Uint128,
    target: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    let msg = match target.cmp(&current) {
        Ordering::Equal => return Ok(None),
        Ordering::Greater => Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: target - current,
            expires: None,
        },
        Ordering::Less => Cw20ExecuteMsg::DecreaseAllowance {
            spender: spender.to_string(),
            amount: current - target,
            expires: None,
        },
    };
    Ok(Some(execute_msg(token, &msg)?))
}

pub fn transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    execute_msg(
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Burn from the sender's own balance. On a child-mapped token this is the
/// withdraw entry point that the bridge turns into an exit on root.
pub fn burn_msg(token: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    execute_msg(token, &Cw20ExecuteMsg::Burn { amount })
}

fn execute_msg(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    fn decode(msg: CosmosMsg) -> (String, Cw20ExecuteMsg) {
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) => (contract_addr, from_json(msg).unwrap()),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn allowance_already_matching_needs_no_message() {
        let token = Addr::unchecked("token");
        let spender = Addr::unchecked("predicate");

        let msg = set_allowance_msg(&token, &spender, Uint128::new(5), Uint128::new(5)).unwrap();
        assert!(msg.is_none());
    }

    #[test]
    fn allowance_raise_emits_increase_for_the_difference() {
        let token = Addr::unchecked("token");
        let spender = Addr::unchecked("predicate");

        let msg = set_allowance_msg(&token, &spender, Uint128::new(3), Uint128::new(10))
            .unwrap()
            .unwrap();
        let (contract, msg) = decode(msg);

        assert_eq!(contract, "token");
        assert_eq!(
            msg,
            Cw20ExecuteMsg::IncreaseAllowance {
                spender: "predicate".to_string(),
                amount: Uint128::new(7),
                expires: None,
            }
        );
    }

    #[test]
    fn allowance_cut_emits_decrease_for_the_difference() {
        let token = Addr::unchecked("token");
        let spender = Addr::unchecked("predicate");

        let msg = set_allowance_msg(&token, &spender, Uint128::new(10), Uint128::zero())
            .unwrap()
            .unwrap();

        assert_eq!(
            decode(msg).1,
            Cw20ExecuteMsg::DecreaseAllowance {
                spender: "predicate".to_string(),
                amount: Uint128::new(10),
                expires: None,
            }
        );
    }
}
