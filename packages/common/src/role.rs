use std::fmt;

use cosmwasm_schema::cw_serde;

/// Which side of the bridge a contract instance serves.
///
/// Fixed at instantiation. Root and child instances run the same code and
/// only diverge where a handler checks this flag.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ChainRole {
    Root,
    Child,
}

impl ChainRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChainRole::Root => "root",
            ChainRole::Child => "child",
        }
    }
}

impl fmt::Display for ChainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
