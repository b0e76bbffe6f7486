//! `SeaORM` Entity, @generated manually
//!
//! Canonical instrument reference keyed by (security_id, exchange_segment).

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::set_if_missing;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instrument_master")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub security_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(64))")]
    pub exchange_segment: String, // e.g. "NSE_EQ", "NSE_FNO"

    pub trading_symbol: Option<String>,
    pub exchange: Option<String>,
    pub segment: Option<String>,
    pub instrument: Option<String>,

    pub underlying: Option<String>,
    pub expiry_code: Option<i32>,
    pub expiry_flag: Option<String>,
    pub expiry_date: Option<Date>,
    pub option_type: Option<String>, // "CE" / "PE"
    pub strike_price: Option<f64>,
    pub lot_size: Option<i32>,

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
