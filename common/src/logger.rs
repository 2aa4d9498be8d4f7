use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    // Pre-rendered "[prefix]" segment, empty when no prefix was requested.
    prefix_segment: String,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        let prefix_segment = match prefix {
            Some(prefix) => format!("[{}]", prefix),
            None => String::new(),
        };
        Self { prefix_segment }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        println!(
            "[{}]{}[{}:{}] {}",
            timestamp, self.prefix_segment, file_name, line, message
        );
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
