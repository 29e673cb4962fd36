//! In-memory `log` sink for tests
//!
//! Installed once per test binary. Records are tagged with the thread that
//! logged them, so tests running in parallel only see their own output.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};

lazy_static! {
    static ref RECORDS: Mutex<Vec<(ThreadId, String)>> = Mutex::new(Vec::new());
}

static INSTALL: Once = Once::new();

struct WarningCapture;

impl Log for WarningCapture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((thread::current().id(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

fn take_own_records() -> Vec<String> {
    let me = thread::current().id();
    let mut records = RECORDS.lock().unwrap();
    let (mine, others): (Vec<_>, Vec<_>) = records.drain(..).partition(|(id, _)| *id == me);
    *records = others;
    mine.into_iter().map(|(_, message)| message).collect()
}

/// Run `f` and return what it produced along with every warning it logged
pub fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INSTALL.call_once(|| {
        log::set_boxed_logger(Box::new(WarningCapture)).unwrap();
        log::set_max_level(LevelFilter::Warn);
    });

    take_own_records();
    let result = f();
    (result, take_own_records())
}
