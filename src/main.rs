use clap::Parser;
use polyjuice_gen::core::Device;
use polyjuice_gen::utils::{logger, validation::Validate};
use polyjuice_gen::{CliConfig, CounterfactualPipeline, GenEngine, HttpPerturber, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting polyjuice-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let device = Device::resolve(config.cuda);
    tracing::info!("Inference device: {}", device.as_str());

    let debug_mode = config.debug;
    let monitor_enabled = config.verbose;

    // 建立存儲、模型客戶端與管道
    let storage = LocalStorage::new();
    let model = HttpPerturber::new(config.model_endpoint.clone(), device);
    let pipeline = CounterfactualPipeline::new(storage, config, model);

    let engine = GenEngine::new_with_monitoring(pipeline, monitor_enabled);
    if engine.monitor().is_enabled() {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    if debug_mode {
        engine.run_debug().await?;
    } else {
        let output_path = engine.run().await?;
        tracing::info!("✅ Counterfactual generation completed successfully!");
        println!("✅ Counterfactual generation completed successfully!");
        println!("📁 Output saved to: {}", output_path);
    }

    engine.monitor().log_final_stats();
    println!("Script execution time: {:?}", engine.monitor().elapsed());

    Ok(())
}
