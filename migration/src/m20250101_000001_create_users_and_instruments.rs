use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string().null())
                    .col(ColumnDef::new(Users::LastName).string().null())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::PasswordHash).string().null())
                    .col(ColumnDef::new(Users::DhanClientId).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // NULL emails do not collide under a unique index
        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_users_dhan_client_id")
                    .table(Users::Table)
                    .col(Users::DhanClientId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AllInstrumentsList::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AllInstrumentsList::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AllInstrumentsList::SemExmExchId).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemSegment).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemSmstSecurityId).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemInstrumentName).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemExpiryCode).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemTradingSymbol).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemLotUnits).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemCustomSymbol).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemExpiryDate).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemStrikePrice).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemOptionType).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemTickSize).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemExpiryFlag).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemExchInstrumentType).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SemSeries).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::SmSymbolName).string().null())
                    .col(ColumnDef::new(AllInstrumentsList::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // Composite key: one row per (security_id, exchange_segment)
        manager
            .create_table(
                Table::create()
                    .table(InstrumentMaster::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(InstrumentMaster::SecurityId).integer().not_null())
                    .col(ColumnDef::new(InstrumentMaster::ExchangeSegment).string_len(64).not_null())
                    .col(ColumnDef::new(InstrumentMaster::TradingSymbol).string().null())
                    .col(ColumnDef::new(InstrumentMaster::Exchange).string().null())
                    .col(ColumnDef::new(InstrumentMaster::Segment).string().null())
                    .col(ColumnDef::new(InstrumentMaster::Instrument).string().null())
                    .col(ColumnDef::new(InstrumentMaster::Underlying).string().null())
                    .col(ColumnDef::new(InstrumentMaster::ExpiryCode).integer().null())
                    .col(ColumnDef::new(InstrumentMaster::ExpiryFlag).string().null())
                    .col(ColumnDef::new(InstrumentMaster::ExpiryDate).date().null())
                    .col(ColumnDef::new(InstrumentMaster::OptionType).string().null())
                    .col(ColumnDef::new(InstrumentMaster::StrikePrice).double().null())
                    .col(ColumnDef::new(InstrumentMaster::LotSize).integer().null())
                    .col(ColumnDef::new(InstrumentMaster::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .name("pk_instrument_master")
                            .col(InstrumentMaster::SecurityId)
                            .col(InstrumentMaster::ExchangeSegment),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InstrumentMaster::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AllInstrumentsList::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    DhanClientId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AllInstrumentsList {
    Table,
    Id,
    SemExmExchId,
    SemSegment,
    SemSmstSecurityId,
    SemInstrumentName,
    SemExpiryCode,
    SemTradingSymbol,
    SemLotUnits,
    SemCustomSymbol,
    SemExpiryDate,
    SemStrikePrice,
    SemOptionType,
    SemTickSize,
    SemExpiryFlag,
    SemExchInstrumentType,
    SemSeries,
    SmSymbolName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InstrumentMaster {
    Table,
    SecurityId,
    ExchangeSegment,
    TradingSymbol,
    Exchange,
    Segment,
    Instrument,
    Underlying,
    ExpiryCode,
    ExpiryFlag,
    ExpiryDate,
    OptionType,
    StrikePrice,
    LotSize,
    CreatedAt,
}
