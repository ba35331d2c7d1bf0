use serde::{Deserialize, Serialize};

use crate::ko::KoRule;

/// Rule options that change move legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub ko: KoRule,
}

impl Rules {
    pub fn superko() -> Self {
        Rules {
            ko: KoRule::Superko,
        }
    }
}
