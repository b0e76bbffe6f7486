//! `SeaORM` Entity, @generated manually
//!
//! Fills exactly as reported by the broker's trade book, charges included.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::set_if_missing;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub order_id: Option<String>,
    pub exchange_order_id: Option<String>,
    pub exchange_trade_id: Option<String>,
    pub transaction_type: Option<String>,
    pub exchange_segment: Option<String>,
    pub product_type: Option<String>,
    pub order_type: Option<String>,

    pub trading_symbol: Option<String>,
    pub custom_symbol: Option<String>,
    pub security_id: Option<String>,
    pub traded_quantity: Option<i32>,
    pub traded_price: Option<f64>,
    pub isin: Option<String>,
    pub instrument: Option<String>,

    pub sebi_tax: Option<f64>,
    pub stt: Option<f64>,
    pub brokerage_charges: Option<f64>,
    pub service_tax: Option<f64>,
    pub exchange_transaction_charges: Option<f64>,
    pub stamp_duty: Option<f64>,

    pub exchange_time: Option<DateTimeUtc>,
    pub drv_expiry_date: Option<String>,
    pub drv_option_type: Option<String>,
    pub drv_strike_price: Option<f64>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Sum of all statutory and broker charges recorded on the fill.
    pub fn total_charges(&self) -> f64 {
        [
            self.sebi_tax,
            self.stt,
            self.brokerage_charges,
            self.service_tax,
            self.exchange_transaction_charges,
            self.stamp_duty,
        ]
        .into_iter()
        .flatten()
        .sum()
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
            set_if_missing(&mut self.created_at, Utc::now());
        }
        Ok(self)
    }
}
