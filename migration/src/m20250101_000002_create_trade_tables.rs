use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Trade plans (saved opportunities)
        manager
            .create_table(
                Table::create()
                    .table(TradePlan::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TradePlan::TradeId).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TradePlan::UserId).integer().null())
                    .col(ColumnDef::new(TradePlan::TradingSymbol).string().not_null())
                    .col(ColumnDef::new(TradePlan::Exchange).string().not_null().default("NSE"))
                    .col(ColumnDef::new(TradePlan::Instrument).string().not_null())
                    .col(ColumnDef::new(TradePlan::TimeFrame).string().not_null())
                    .col(ColumnDef::new(TradePlan::TradeDirection).string().not_null())
                    .col(ColumnDef::new(TradePlan::TradeType).string().not_null())
                    .col(ColumnDef::new(TradePlan::TradeSetup).string().not_null())
                    .col(ColumnDef::new(TradePlan::EntryPrice).double().null())
                    .col(ColumnDef::new(TradePlan::StopLoss).double().null())
                    .col(ColumnDef::new(TradePlan::TargetPrice).double().null())
                    .col(ColumnDef::new(TradePlan::Signal).string().null())
                    .col(ColumnDef::new(TradePlan::Probability).string().null())
                    .col(ColumnDef::new(TradePlan::Score).double().null())
                    .col(ColumnDef::new(TradePlan::ExecutionStrategy).string().null())
                    .col(ColumnDef::new(TradePlan::ExecutionFlag).string_len(16).not_null().default("Disabled")) // Disabled, Enabled, Traded, Exited
                    .col(ColumnDef::new(TradePlan::Status).string().null())
                    .col(ColumnDef::new(TradePlan::Notes).text().null())
                    .col(ColumnDef::new(TradePlan::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(TradePlan::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;
        create_user_index(manager, "idx_trade_plan_user", TradePlan::Table, TradePlan::UserId).await?;

        // Live trades (one row per leg)
        manager
            .create_table(
                Table::create()
                    .table(LiveTrades::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LiveTrades::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(LiveTrades::UserId).integer().null())
                    .col(ColumnDef::new(LiveTrades::TradeId).integer().null())
                    .col(ColumnDef::new(LiveTrades::TradingSymbol).string().not_null())
                    .col(ColumnDef::new(LiveTrades::Exchange).string().not_null().default("NSE"))
                    .col(ColumnDef::new(LiveTrades::Instrument).string().not_null())
                    .col(ColumnDef::new(LiveTrades::Ltp).double().null())
                    .col(ColumnDef::new(LiveTrades::TransactionType).string().null())
                    .col(ColumnDef::new(LiveTrades::EntryOrderId).string().null())
                    .col(ColumnDef::new(LiveTrades::EntryPrice).double().null())
                    .col(ColumnDef::new(LiveTrades::EntryQuantity).integer().null())
                    .col(ColumnDef::new(LiveTrades::EntryDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(LiveTrades::EntryTime).string().null())
                    .col(ColumnDef::new(LiveTrades::ExitOrderId).string().null())
                    .col(ColumnDef::new(LiveTrades::ExitPrice).double().null())
                    .col(ColumnDef::new(LiveTrades::ExitQuantity).integer().null())
                    .col(ColumnDef::new(LiveTrades::ExitDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(LiveTrades::ExitTime).string().null())
                    .col(ColumnDef::new(LiveTrades::Status).string().not_null().default("Traded"))
                    .col(ColumnDef::new(LiveTrades::Remark).string().null())
                    .col(ColumnDef::new(LiveTrades::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;
        create_user_index(manager, "idx_live_trades_user", LiveTrades::Table, LiveTrades::UserId).await?;

        // Closed trade summary
        manager
            .create_table(
                Table::create()
                    .table(TradeLog::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TradeLog::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TradeLog::UserId).integer().null())
                    .col(ColumnDef::new(TradeLog::TradeId).string().null())
                    .col(ColumnDef::new(TradeLog::TradingSymbol).string().null())
                    .col(ColumnDef::new(TradeLog::Exchange).string().not_null().default("NSE"))
                    .col(ColumnDef::new(TradeLog::Instrument).string().null())
                    .col(ColumnDef::new(TradeLog::TradeDirection).string().null())
                    .col(ColumnDef::new(TradeLog::TradeType).string().null())
                    .col(ColumnDef::new(TradeLog::TradeSetup).string().null())
                    .col(ColumnDef::new(TradeLog::Probability).string().null())
                    .col(ColumnDef::new(TradeLog::ExecutionStrategy).string().null())
                    .col(ColumnDef::new(TradeLog::EntryDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(TradeLog::EntryTime).string().null())
                    .col(ColumnDef::new(TradeLog::ExitDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(TradeLog::ExitTime).string().null())
                    .col(ColumnDef::new(TradeLog::Pnl).double().null())
                    .col(ColumnDef::new(TradeLog::Roi).string().null())
                    .col(ColumnDef::new(TradeLog::RiskReward).string().null())
                    .col(ColumnDef::new(TradeLog::HoldingPeriod).string().null())
                    .col(ColumnDef::new(TradeLog::Remark).string().null())
                    .col(ColumnDef::new(TradeLog::Notes).text().null())
                    .col(ColumnDef::new(TradeLog::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;
        create_user_index(manager, "idx_trade_log_user", TradeLog::Table, TradeLog::UserId).await?;

        // Per-leg detail of a closed trade
        manager
            .create_table(
                Table::create()
                    .table(TradeLogDetail::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TradeLogDetail::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TradeLogDetail::UserId).integer().null())
                    .col(ColumnDef::new(TradeLogDetail::TradeId).string().null())
                    .col(ColumnDef::new(TradeLogDetail::TradingSymbol).string().null())
                    .col(ColumnDef::new(TradeLogDetail::Exchange).string().not_null().default("NSE"))
                    .col(ColumnDef::new(TradeLogDetail::Instrument).string().null())
                    .col(ColumnDef::new(TradeLogDetail::EntryOrderId).string().null())
                    .col(ColumnDef::new(TradeLogDetail::EntryPrice).double().null())
                    .col(ColumnDef::new(TradeLogDetail::EntryQuantity).integer().null())
                    .col(ColumnDef::new(TradeLogDetail::ExitOrderId).string().null())
                    .col(ColumnDef::new(TradeLogDetail::ExitPrice).double().null())
                    .col(ColumnDef::new(TradeLogDetail::ExitQuantity).integer().null())
                    .col(ColumnDef::new(TradeLogDetail::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;
        create_user_index(manager, "idx_trade_log_detail_user", TradeLogDetail::Table, TradeLogDetail::UserId).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TradeLogDetail::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TradeLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LiveTrades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TradePlan::Table).to_owned())
            .await
    }
}

async fn create_user_index<T, C>(
    manager: &SchemaManager<'_>,
    name: &str,
    table: T,
    column: C,
) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    manager
        .create_index(
            Index::create()
                .name(name)
                .table(table)
                .col(column)
                .if_not_exists()
                .to_owned(),
        )
        .await
}

#[derive(DeriveIden)]
enum TradePlan {
    Table,
    TradeId,
    UserId,
    TradingSymbol,
    Exchange,
    Instrument,
    TimeFrame,
    TradeDirection,
    TradeType,
    TradeSetup,
    EntryPrice,
    StopLoss,
    TargetPrice,
    Signal,
    Probability,
    Score,
    ExecutionStrategy,
    ExecutionFlag,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LiveTrades {
    Table,
    Id,
    UserId,
    TradeId,
    TradingSymbol,
    Exchange,
    Instrument,
    Ltp,
    TransactionType,
    EntryOrderId,
    EntryPrice,
    EntryQuantity,
    EntryDate,
    EntryTime,
    ExitOrderId,
    ExitPrice,
    ExitQuantity,
    ExitDate,
    ExitTime,
    Status,
    Remark,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TradeLog {
    Table,
    Id,
    UserId,
    TradeId,
    TradingSymbol,
    Exchange,
    Instrument,
    TradeDirection,
    TradeType,
    TradeSetup,
    Probability,
    ExecutionStrategy,
    EntryDate,
    EntryTime,
    ExitDate,
    ExitTime,
    Pnl,
    Roi,
    RiskReward,
    HoldingPeriod,
    Remark,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TradeLogDetail {
    Table,
    Id,
    UserId,
    TradeId,
    TradingSymbol,
    Exchange,
    Instrument,
    EntryOrderId,
    EntryPrice,
    EntryQuantity,
    ExitOrderId,
    ExitPrice,
    ExitQuantity,
    CreatedAt,
}
