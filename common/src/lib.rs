pub mod config;
pub mod games;
pub mod logger;
pub mod scores;

#[cfg(test)]
pub mod test_util;
