//! `SeaORM` Entity, @generated manually
//!
//! One position leg. Legs of a multi-leg strategy share `trade_id`.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::{set_if_missing, DEFAULT_EXCHANGE};

/// Status stored for a leg when the caller leaves it unset.
pub const DEFAULT_STATUS: &str = "Traded";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "live_trades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub trade_id: Option<i32>,

    pub trading_symbol: String,
    #[sea_orm(default_value = "NSE")]
    pub exchange: String,
    pub instrument: String,

    pub ltp: Option<f64>,
    pub transaction_type: Option<String>, // "BUY" / "SELL"

    pub entry_order_id: Option<String>,
    pub entry_price: Option<f64>,
    pub entry_quantity: Option<i32>,
    pub entry_date: Option<DateTimeUtc>,
    pub entry_time: Option<String>,

    pub exit_order_id: Option<String>,
    pub exit_price: Option<f64>,
    pub exit_quantity: Option<i32>,
    pub exit_date: Option<DateTimeUtc>,
    pub exit_time: Option<String>,

    #[sea_orm(default_value = "Traded")]
    pub status: String,
    pub remark: Option<String>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

impl Model {
    /// A leg is open until an exit price has been recorded.
    pub fn is_open(&self) -> bool {
        self.exit_price.is_none()
    }
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
            set_if_missing(&mut self.status, DEFAULT_STATUS.to_string());
            set_if_missing(&mut self.created_at, Utc::now());
        }
        Ok(self)
    }
}
