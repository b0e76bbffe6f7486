pub use super::all_instruments_list::Entity as AllInstrumentsList;
pub use super::indicator_data::Entity as IndicatorData;
pub use super::instrument_master::Entity as InstrumentMaster;
pub use super::ledger_report::Entity as LedgerReport;
pub use super::live_trades::Entity as LiveTrades;
pub use super::trade_history::Entity as TradeHistory;
pub use super::trade_log::Entity as TradeLog;
pub use super::trade_log_detail::Entity as TradeLogDetail;
pub use super::trade_plan::{Entity as TradePlan, ExecutionFlag};
pub use super::users::Entity as Users;
