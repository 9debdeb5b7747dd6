//! Tax Model (tax master)

use serde::{Deserialize, Serialize};

use crate::util::{null_default, opt_f64};

/// Tax master entry, e.g. `GST 18%`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    #[serde(default)]
    pub tax_id: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub tax_name: String,
    #[serde(default, with = "opt_f64")]
    pub tax_percent: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub is_active: bool,
}
