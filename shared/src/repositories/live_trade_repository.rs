use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};
use std::sync::Arc;

use crate::entity::live_trades;

pub struct LiveTradeRepository {
    db: Arc<DatabaseConnection>,
}

impl LiveTradeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a leg. `status` defaults to "Traded" and `exchange` to "NSE".
    pub async fn create(&self, active_model: live_trades::ActiveModel) -> Result<live_trades::Model> {
        let trade = active_model.insert(self.db.as_ref()).await?;
        Ok(trade)
    }

    /// Legs without an exit price.
    pub async fn open_for_user(&self, user_id: i32) -> Result<Vec<live_trades::Model>> {
        let trades = live_trades::Entity::find()
            .filter(live_trades::Column::UserId.eq(user_id))
            .filter(live_trades::Column::ExitPrice.is_null())
            .order_by_asc(live_trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    /// All legs grouped under one multi-leg trade.
    pub async fn legs_for_trade(&self, trade_id: i32) -> Result<Vec<live_trades::Model>> {
        let trades = live_trades::Entity::find()
            .filter(live_trades::Column::TradeId.eq(trade_id))
            .order_by_asc(live_trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }
}
