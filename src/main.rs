use clap::Parser;
use fosterbook::app::cli_run;
use fosterbook::utils::{logger, validation::Validate};
use fosterbook::{BookConfig, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入設定檔；日誌尚未初始化，直接輸出到 stderr
    let config = match cli.config.as_deref() {
        Some(path) => match BookConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(e.exit_code().max(2));
            }
        },
        None => BookConfig::default(),
    };

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.uses_json_logs() {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting fosterbook");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| cli.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = match cli_run::run(&cli, &config, &mut stdout, &mut stderr) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
