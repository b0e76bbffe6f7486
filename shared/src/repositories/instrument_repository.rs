use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};
use std::sync::Arc;

use crate::entity::instrument_master;

pub struct InstrumentRepository {
    db: Arc<DatabaseConnection>,
}

impl InstrumentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_key(
        &self,
        security_id: i32,
        exchange_segment: &str,
    ) -> Result<Option<instrument_master::Model>> {
        let instrument =
            instrument_master::Entity::find_by_id((security_id, exchange_segment.to_string()))
                .one(self.db.as_ref())
                .await?;
        Ok(instrument)
    }

    /// Insert a new instrument. Fails if the (security_id, exchange_segment) pair exists.
    pub async fn insert(
        &self,
        active_model: instrument_master::ActiveModel,
    ) -> Result<instrument_master::Model> {
        let instrument = active_model.insert(self.db.as_ref()).await?;
        Ok(instrument)
    }

    pub async fn list_by_segment(
        &self,
        exchange_segment: &str,
    ) -> Result<Vec<instrument_master::Model>> {
        let instruments = instrument_master::Entity::find()
            .filter(instrument_master::Column::ExchangeSegment.eq(exchange_segment))
            .order_by_asc(instrument_master::Column::SecurityId)
            .all(self.db.as_ref())
            .await?;
        Ok(instruments)
    }

    pub async fn find_by_symbol(&self, trading_symbol: &str) -> Result<Vec<instrument_master::Model>> {
        let instruments = instrument_master::Entity::find()
            .filter(instrument_master::Column::TradingSymbol.eq(trading_symbol))
            .all(self.db.as_ref())
            .await?;
        Ok(instruments)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = instrument_master::Entity::find()
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
