use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-computed nutrition targets.
///
/// Never computed or edited locally; always replaced wholesale from a server response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Goals {
    pub daily_kcal: u32,
    /// Macro name to grams
    pub macros_target: BTreeMap<String, u32>,
}

impl Goals {
    pub fn new(daily_kcal: u32, macros_target: BTreeMap<String, u32>) -> Self {
        Self {
            daily_kcal,
            macros_target,
        }
    }
}
