use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};
use std::sync::Arc;

use crate::entity::ledger_report;

pub struct LedgerRepository {
    db: Arc<DatabaseConnection>,
}

impl LedgerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Store an entry as given. The caller supplies `running_balance`.
    pub async fn append(&self, active_model: ledger_report::ActiveModel) -> Result<ledger_report::Model> {
        let entry = active_model.insert(self.db.as_ref()).await?;
        Ok(entry)
    }

    /// Running balance on the most recent entry for the user, if any.
    pub async fn latest_balance(&self, user_id: i32) -> Result<Option<f64>> {
        let entry = ledger_report::Entity::find()
            .filter(ledger_report::Column::UserId.eq(user_id))
            .order_by_desc(ledger_report::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(entry.and_then(|e| e.running_balance))
    }

    pub async fn entries_for_user(&self, user_id: i32) -> Result<Vec<ledger_report::Model>> {
        let entries = ledger_report::Entity::find()
            .filter(ledger_report::Column::UserId.eq(user_id))
            .order_by_asc(ledger_report::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(entries)
    }
}
