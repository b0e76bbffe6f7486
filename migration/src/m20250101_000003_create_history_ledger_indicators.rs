use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Broker trade book
        manager
            .create_table(
                Table::create()
                    .table(TradeHistory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TradeHistory::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TradeHistory::UserId).integer().null())
                    .col(ColumnDef::new(TradeHistory::OrderId).string().null())
                    .col(ColumnDef::new(TradeHistory::ExchangeOrderId).string().null())
                    .col(ColumnDef::new(TradeHistory::ExchangeTradeId).string().null())
                    .col(ColumnDef::new(TradeHistory::TransactionType).string().null())
                    .col(ColumnDef::new(TradeHistory::ExchangeSegment).string().null())
                    .col(ColumnDef::new(TradeHistory::ProductType).string().null())
                    .col(ColumnDef::new(TradeHistory::OrderType).string().null())
                    .col(ColumnDef::new(TradeHistory::TradingSymbol).string().null())
                    .col(ColumnDef::new(TradeHistory::CustomSymbol).string().null())
                    .col(ColumnDef::new(TradeHistory::SecurityId).string().null())
                    .col(ColumnDef::new(TradeHistory::TradedQuantity).integer().null())
                    .col(ColumnDef::new(TradeHistory::TradedPrice).double().null())
                    .col(ColumnDef::new(TradeHistory::Isin).string().null())
                    .col(ColumnDef::new(TradeHistory::Instrument).string().null())
                    .col(ColumnDef::new(TradeHistory::SebiTax).double().null())
                    .col(ColumnDef::new(TradeHistory::Stt).double().null())
                    .col(ColumnDef::new(TradeHistory::BrokerageCharges).double().null())
                    .col(ColumnDef::new(TradeHistory::ServiceTax).double().null())
                    .col(ColumnDef::new(TradeHistory::ExchangeTransactionCharges).double().null())
                    .col(ColumnDef::new(TradeHistory::StampDuty).double().null())
                    .col(ColumnDef::new(TradeHistory::ExchangeTime).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(TradeHistory::DrvExpiryDate).string().null())
                    .col(ColumnDef::new(TradeHistory::DrvOptionType).string().null())
                    .col(ColumnDef::new(TradeHistory::DrvStrikePrice).double().null())
                    .col(ColumnDef::new(TradeHistory::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_trade_history_user")
                    .table(TradeHistory::Table)
                    .col(TradeHistory::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Cash ledger
        manager
            .create_table(
                Table::create()
                    .table(LedgerReport::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LedgerReport::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(LedgerReport::UserId).integer().null())
                    .col(ColumnDef::new(LedgerReport::Narration).string().null())
                    .col(ColumnDef::new(LedgerReport::VoucherDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(LedgerReport::Exchange).string().null())
                    .col(ColumnDef::new(LedgerReport::VoucherDesc).string().null())
                    .col(ColumnDef::new(LedgerReport::VoucherNumber).string().null())
                    .col(ColumnDef::new(LedgerReport::Debit).double().null())
                    .col(ColumnDef::new(LedgerReport::Credit).double().null())
                    .col(ColumnDef::new(LedgerReport::RunningBalance).double().null())
                    .col(ColumnDef::new(LedgerReport::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_report_user")
                    .table(LedgerReport::Table)
                    .col(LedgerReport::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Indicator snapshots, one row per symbol/timeframe/bar
        let mut indicators = Table::create();
        indicators
            .table(IndicatorData::Table)
            .if_not_exists()
            .col(ColumnDef::new(IndicatorData::Id).integer().not_null().auto_increment().primary_key())
            .col(ColumnDef::new(IndicatorData::TradingSymbol).string().null())
            .col(ColumnDef::new(IndicatorData::SecurityId).string().null())
            .col(ColumnDef::new(IndicatorData::ExchangeSegment).string().null())
            .col(ColumnDef::new(IndicatorData::Timeframe).string().null())
            .col(ColumnDef::new(IndicatorData::Datetime).timestamp_with_time_zone().null());
        for column in IndicatorData::VALUE_COLUMNS {
            indicators.col(ColumnDef::new(column).double().null());
        }
        indicators
            .col(ColumnDef::new(IndicatorData::Supertrend).string().null())
            .col(ColumnDef::new(IndicatorData::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()));

        manager.create_table(indicators).await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_indicator_data_symbol")
                    .table(IndicatorData::Table)
                    .col(IndicatorData::TradingSymbol)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IndicatorData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LedgerReport::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TradeHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TradeHistory {
    Table,
    Id,
    UserId,
    OrderId,
    ExchangeOrderId,
    ExchangeTradeId,
    TransactionType,
    ExchangeSegment,
    ProductType,
    OrderType,
    TradingSymbol,
    CustomSymbol,
    SecurityId,
    TradedQuantity,
    TradedPrice,
    Isin,
    Instrument,
    SebiTax,
    Stt,
    BrokerageCharges,
    ServiceTax,
    ExchangeTransactionCharges,
    StampDuty,
    ExchangeTime,
    DrvExpiryDate,
    DrvOptionType,
    DrvStrikePrice,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LedgerReport {
    Table,
    Id,
    UserId,
    Narration,
    VoucherDate,
    Exchange,
    VoucherDesc,
    VoucherNumber,
    Debit,
    Credit,
    RunningBalance,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum IndicatorData {
    Table,
    Id,
    TradingSymbol,
    SecurityId,
    ExchangeSegment,
    Timeframe,
    Datetime,
    Open,
    High,
    Low,
    Close,
    Volume,
    Vwap,
    #[sea_orm(iden = "volume_sma_10")]
    VolumeSma10,
    HaOpen,
    HaHigh,
    HaLow,
    HaClose,
    #[sea_orm(iden = "ema_5")]
    Ema5,
    #[sea_orm(iden = "ema_13")]
    Ema13,
    #[sea_orm(iden = "ema_26")]
    Ema26,
    #[sea_orm(iden = "ema_50")]
    Ema50,
    #[sea_orm(iden = "ema_100")]
    Ema100,
    #[sea_orm(iden = "ema_200")]
    Ema200,
    #[sea_orm(iden = "rsi_14")]
    Rsi14,
    MacdLine,
    MacdSignal,
    MacdHist,
    StochasticK,
    StochasticD,
    #[sea_orm(iden = "bollinger_upper_2")]
    BollingerUpper2,
    #[sea_orm(iden = "bollinger_middle_2")]
    BollingerMiddle2,
    #[sea_orm(iden = "bollinger_lower_2")]
    BollingerLower2,
    #[sea_orm(iden = "bollinger_upper_3")]
    BollingerUpper3,
    #[sea_orm(iden = "bollinger_middle_3")]
    BollingerMiddle3,
    #[sea_orm(iden = "bollinger_lower_3")]
    BollingerLower3,
    #[sea_orm(iden = "plus_di_14")]
    PlusDi14,
    #[sea_orm(iden = "minus_di_14")]
    MinusDi14,
    #[sea_orm(iden = "adx_14")]
    Adx14,
    #[sea_orm(iden = "atr_14")]
    Atr14,
    HistoricVolatility,
    Supertrend,
    CreatedAt,
}

impl IndicatorData {
    /// Nullable `double` columns between the bar timestamp and `supertrend`.
    const VALUE_COLUMNS: [IndicatorData; 34] = [
        IndicatorData::Open,
        IndicatorData::High,
        IndicatorData::Low,
        IndicatorData::Close,
        IndicatorData::Volume,
        IndicatorData::Vwap,
        IndicatorData::VolumeSma10,
        IndicatorData::HaOpen,
        IndicatorData::HaHigh,
        IndicatorData::HaLow,
        IndicatorData::HaClose,
        IndicatorData::Ema5,
        IndicatorData::Ema13,
        IndicatorData::Ema26,
        IndicatorData::Ema50,
        IndicatorData::Ema100,
        IndicatorData::Ema200,
        IndicatorData::Rsi14,
        IndicatorData::MacdLine,
        IndicatorData::MacdSignal,
        IndicatorData::MacdHist,
        IndicatorData::StochasticK,
        IndicatorData::StochasticD,
        IndicatorData::BollingerUpper2,
        IndicatorData::BollingerMiddle2,
        IndicatorData::BollingerLower2,
        IndicatorData::BollingerUpper3,
        IndicatorData::BollingerMiddle3,
        IndicatorData::BollingerLower3,
        IndicatorData::PlusDi14,
        IndicatorData::MinusDi14,
        IndicatorData::Adx14,
        IndicatorData::Atr14,
        IndicatorData::HistoricVolatility,
    ];
}
