//! `SeaORM` Entity, @generated manually
//!
//! Cash ledger. `running_balance` is maintained by whoever appends the entry.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::set_if_missing;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: Option<i32>,
    pub narration: Option<String>,
    pub voucher_date: Option<DateTimeUtc>,
    pub exchange: Option<String>,
    pub voucher_desc: Option<String>,
    pub voucher_number: Option<String>,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
    pub running_balance: Option<f64>,

    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Credit minus debit; missing sides count as zero.
    pub fn net_amount(&self) -> f64 {
        self.credit.unwrap_or(0.0) - self.debit.unwrap_or(0.0)
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
