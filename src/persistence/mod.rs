pub mod files;
pub mod ledger;
pub mod settings;
pub mod store;

pub use files::{
    atomic_write, config_file, ensure_data_dir, init_local_data_dir, log_file,
    report_file,
};
pub use ledger::Ledger;
pub use settings::{load_settings, save_settings, Settings};
pub use store::{FileStore, KeyValueStore};
