pub mod batch;
#[cfg(feature = "cli")]
pub mod cli_run;
pub mod export;
