//! `SeaORM` entities, one module per table.

pub mod prelude;

pub mod all_instruments_list;
pub mod indicator_data;
pub mod instrument_master;
pub mod ledger_report;
pub mod live_trades;
pub mod trade_history;
pub mod trade_log;
pub mod trade_log_detail;
pub mod trade_plan;
pub mod users;

use sea_orm::{ActiveValue, Value};

/// Exchange stored when the caller leaves it unset.
pub const DEFAULT_EXCHANGE: &str = "NSE";

/// Fill an untouched field on insert; explicit values and `Unchanged` are kept.
pub(crate) fn set_if_missing<V>(field: &mut ActiveValue<V>, value: V)
where
    V: Into<Value>,
{
    if field.is_not_set() {
        *field = ActiveValue::Set(value);
    }
}
