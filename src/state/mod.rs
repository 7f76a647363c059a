mod manager;
mod persistence;

pub use manager::{JournalManager, LogRecord, PlanRecord};
pub use persistence::{GoalRecord, JournalFile, load_journal, save_journal, write_log_csv};
