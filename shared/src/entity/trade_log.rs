//! `SeaORM` Entity, @generated manually
//!
//! Summary row written when a trade is closed.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::{set_if_missing, DEFAULT_EXCHANGE};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub trade_id: Option<String>,
    pub trading_symbol: Option<String>,
    #[sea_orm(default_value = "NSE")]
    pub exchange: String,
    pub instrument: Option<String>,

    pub trade_direction: Option<String>,
    pub trade_type: Option<String>,
    pub trade_setup: Option<String>,
    pub probability: Option<String>,
    pub execution_strategy: Option<String>,

    pub entry_date: Option<DateTimeUtc>,
    pub entry_time: Option<String>,
    pub exit_date: Option<DateTimeUtc>,
    pub exit_time: Option<String>,

    pub pnl: Option<f64>,
    pub roi: Option<String>,
    pub risk_reward: Option<String>,
    pub holding_period: Option<String>,

    pub remark: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
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
