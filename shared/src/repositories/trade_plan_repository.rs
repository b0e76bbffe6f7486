use anyhow::{anyhow, Result};
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel, QueryOrder};
use std::sync::Arc;
use tracing::info;

use crate::entity::trade_plan::{self, ExecutionFlag};

pub struct TradePlanRepository {
    db: Arc<DatabaseConnection>,
}

impl TradePlanRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, trade_id: i32) -> Result<Option<trade_plan::Model>> {
        let plan = trade_plan::Entity::find_by_id(trade_id)
            .one(self.db.as_ref())
            .await?;
        Ok(plan)
    }

    /// Insert a plan. Unset `exchange`/`execution_flag` get their defaults.
    pub async fn create(&self, active_model: trade_plan::ActiveModel) -> Result<trade_plan::Model> {
        let plan = active_model.insert(self.db.as_ref()).await?;
        info!(
            "Created trade plan {} for {} ({})",
            plan.trade_id, plan.trading_symbol, plan.execution_flag
        );
        Ok(plan)
    }

    pub async fn set_execution_flag(
        &self,
        trade_id: i32,
        flag: ExecutionFlag,
    ) -> Result<trade_plan::Model> {
        let plan = self
            .find_by_id(trade_id)
            .await?
            .ok_or_else(|| anyhow!("Trade plan {} not found", trade_id))?;

        let previous = plan.execution_flag;
        let mut active_model = plan.into_active_model();
        active_model.execution_flag = ActiveValue::Set(flag);
        let updated = active_model.update(self.db.as_ref()).await?;

        info!("Trade plan {} execution flag {} -> {}", trade_id, previous, flag);
        Ok(updated)
    }

    pub async fn list_by_flag(&self, flag: ExecutionFlag) -> Result<Vec<trade_plan::Model>> {
        let plans = trade_plan::Entity::find()
            .filter(trade_plan::Column::ExecutionFlag.eq(flag))
            .order_by_asc(trade_plan::Column::TradeId)
            .all(self.db.as_ref())
            .await?;
        Ok(plans)
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<trade_plan::Model>> {
        let plans = trade_plan::Entity::find()
            .filter(trade_plan::Column::UserId.eq(user_id))
            .order_by_desc(trade_plan::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(plans)
    }
}
