pub mod instrument_repository;
pub mod ledger_repository;
pub mod live_trade_repository;
pub mod trade_plan_repository;

pub use instrument_repository::InstrumentRepository;
pub use ledger_repository::LedgerRepository;
pub use live_trade_repository::LiveTradeRepository;
pub use trade_plan_repository::TradePlanRepository;
