//! `SeaORM` Entity, @generated manually
//!
//! Rows imported as-is from the broker's scrip master file.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::set_if_missing;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "all_instruments_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sem_exm_exch_id: Option<String>,
    pub sem_segment: Option<String>,
    pub sem_smst_security_id: Option<String>,
    pub sem_instrument_name: Option<String>,
    pub sem_expiry_code: Option<String>,
    pub sem_trading_symbol: Option<String>,
    pub sem_lot_units: Option<String>,
    pub sem_custom_symbol: Option<String>,
    pub sem_expiry_date: Option<String>,
    pub sem_strike_price: Option<String>,
    pub sem_option_type: Option<String>,
    pub sem_tick_size: Option<String>,
    pub sem_expiry_flag: Option<String>,
    pub sem_exch_instrument_type: Option<String>,
    pub sem_series: Option<String>,
    pub sm_symbol_name: Option<String>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            set_if_missing(&mut self.created_at, Utc::now());
        }
        Ok(self)
    }
}
