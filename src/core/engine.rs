use crate::core::{GenerationResult, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct GenEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> GenEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn monitor(&self) -> &RunMonitor {
        &self.monitor
    }

    pub async fn run(&self) -> Result<String> {
        let result = self.generate_counterfactuals().await?;

        println!("Exporting counterfactuals...");
        let output_path = self.pipeline.export(result).await?;
        self.monitor.log_stats("Export");

        Ok(output_path)
    }

    /// Debug 模式：只產生並列印配對，不寫檔
    pub async fn run_debug(&self) -> Result<()> {
        let result = self.generate_counterfactuals().await?;

        for pair in &result.pairs {
            println!("Original: {}\n\nCounter: {}\n", pair.original, pair.counter);
            println!("{}", "=".repeat(100));
        }

        Ok(())
    }

    async fn generate_counterfactuals(&self) -> Result<GenerationResult> {
        println!("Loading source sentences...");
        let sentences = self.pipeline.load().await?;
        println!("Loaded {} sentences", sentences.len());
        self.monitor.log_stats("Load");

        println!("Generating counterfactuals...");
        let result = self.pipeline.generate(sentences).await?;
        println!(
            "Generated {} edits ({} from model, {} kept original)",
            result.pairs.len(),
            result.model_edits,
            result.fallbacks
        );
        self.monitor.log_stats("Generate");

        Ok(result)
    }
}
