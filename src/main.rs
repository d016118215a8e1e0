use anyhow::Context;
use clap::Parser;
use oop_lecture::utils::{logger, validation::Validate};
use oop_lecture::{CliConfig, FleetConfig, Lecture};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting oop-lecture");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut lecture = Lecture::new(&config.sections)?.with_report_format(config.report_format());

    // 載入車隊
    if let Some(path) = &config.fleet {
        tracing::info!("📁 Loading fleet from: {}", path);
        let fleet = FleetConfig::from_file(path)
            .with_context(|| format!("failed to load fleet file '{}'", path))?;
        if let Err(e) = fleet.validate() {
            tracing::error!("❌ Fleet validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        if let Some(distance) = fleet.drive_distance() {
            lecture = lecture.with_drive_distance(distance);
        }
        lecture = lecture.with_fleet(fleet.build_fleet()?);
    }

    // 命令列覆蓋設定
    if let Some(distance) = config.distance {
        tracing::info!("🔧 Drive distance overridden to: {}", distance);
        lecture = lecture.with_drive_distance(distance);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    lecture.run(&mut out).context("lecture output failed")?;

    Ok(())
}
