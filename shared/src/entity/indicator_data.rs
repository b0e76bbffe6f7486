//! `SeaORM` Entity, @generated manually
//!
//! Precomputed technical values for one symbol, timeframe and bar. The values
//! are written by an external calculator; nothing here derives them.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::set_if_missing;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "indicator_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub trading_symbol: Option<String>,
    pub security_id: Option<String>,
    pub exchange_segment: Option<String>,
    pub timeframe: Option<String>,
    pub datetime: Option<DateTimeUtc>, // bar open time

    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub vwap: Option<f64>,
    pub volume_sma_10: Option<f64>,

    // Heikin-Ashi
    pub ha_open: Option<f64>,
    pub ha_high: Option<f64>,
    pub ha_low: Option<f64>,
    pub ha_close: Option<f64>,

    // EMA
    pub ema_5: Option<f64>,
    pub ema_13: Option<f64>,
    pub ema_26: Option<f64>,
    pub ema_50: Option<f64>,
    pub ema_100: Option<f64>,
    pub ema_200: Option<f64>,

    // RSI, MACD
    pub rsi_14: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,

    // Stochastic
    pub stochastic_k: Option<f64>,
    pub stochastic_d: Option<f64>,

    // Bollinger Bands at 2 and 3 standard deviations
    pub bollinger_upper_2: Option<f64>,
    pub bollinger_middle_2: Option<f64>,
    pub bollinger_lower_2: Option<f64>,
    pub bollinger_upper_3: Option<f64>,
    pub bollinger_middle_3: Option<f64>,
    pub bollinger_lower_3: Option<f64>,

    // DMI
    pub plus_di_14: Option<f64>,
    pub minus_di_14: Option<f64>,
    pub adx_14: Option<f64>,

    // Volatility
    pub atr_14: Option<f64>,
    pub historic_volatility: Option<f64>,

    pub supertrend: Option<String>, // "True" / "False"

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Supertrend direction. `None` when unset or not one of the stored spellings.
    pub fn supertrend_bullish(&self) -> Option<bool> {
        match self.supertrend.as_deref() {
            Some("True") => Some(true),
            Some("False") => Some(false),
            _ => None,
        }
    }
}

/// Encode a supertrend direction the way the column stores it.
pub fn supertrend_value(bullish: bool) -> String {
    let value = if bullish { "True" } else { "False" };
    value.to_string()
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
