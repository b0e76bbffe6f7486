//! `SeaORM` Entity, @generated manually

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::{set_if_missing, DEFAULT_EXCHANGE};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_log_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub trade_id: Option<String>, // matches trade_log.trade_id
    pub trading_symbol: Option<String>,
    #[sea_orm(default_value = "NSE")]
    pub exchange: String,
    pub instrument: Option<String>,

    pub entry_order_id: Option<String>,
    pub entry_price: Option<f64>,
    pub entry_quantity: Option<i32>,

    pub exit_order_id: Option<String>,
    pub exit_price: Option<f64>,
    pub exit_quantity: Option<i32>,

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
            set_if_missing(&mut self.exchange, DEFAULT_EXCHANGE.to_string());
            set_if_missing(&mut self.created_at, Utc::now());
        }
        Ok(self)
    }
}
