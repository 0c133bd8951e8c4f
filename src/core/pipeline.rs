use crate::core::{ConfigProvider, EditPair, GenerationResult, Perturber, Pipeline, Storage};
use crate::utils::error::{GenError, Result};

/// Header of the single output column.
pub const COUNTER_COLUMN: &str = "counter_sents";

/// 每個句子只向模型要求一個候選
const NUM_PERTURBATIONS: usize = 1;

/// Keep the first candidate the model produced, or the original sentence
/// when it produced none.
pub fn select_edit(candidates: Vec<String>, original: &str) -> String {
    candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| original.to_string())
}

pub struct CounterfactualPipeline<S: Storage, C: ConfigProvider, M: Perturber> {
    storage: S,
    config: C,
    model: M,
}

impl<S: Storage, C: ConfigProvider, M: Perturber> CounterfactualPipeline<S, C, M> {
    pub fn new(storage: S, config: C, model: M) -> Self {
        Self {
            storage,
            config,
            model,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: Perturber> Pipeline for CounterfactualPipeline<S, C, M> {
    async fn load(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading source table: {}", self.config.source_csv());
        let raw = self.storage.read_file(self.config.source_csv()).await?;

        let mut reader = csv::Reader::from_reader(raw.as_slice());

        // 依標頭名稱找出來源欄位
        let column = reader
            .headers()?
            .iter()
            .position(|header| header == self.config.source_col())
            .ok_or_else(|| GenError::ProcessingError {
                message: format!(
                    "column '{}' not found in {}",
                    self.config.source_col(),
                    self.config.source_csv()
                ),
            })?;

        let mut sentences = Vec::new();
        for record in reader.records() {
            let record = record?;
            sentences.push(record.get(column).unwrap_or_default().to_string());
        }

        Ok(sentences)
    }

    async fn generate(&self, sentences: Vec<String>) -> Result<GenerationResult> {
        let mut pairs = Vec::with_capacity(sentences.len());
        let mut model_edits = 0usize;
        let mut fallbacks = 0usize;

        for (row, original) in sentences.into_iter().enumerate() {
            // 逐句呼叫模型，錯誤直接往外傳，不重試
            let candidates = self.model.perturb(&original, NUM_PERTURBATIONS).await?;

            if candidates.is_empty() {
                fallbacks += 1;
            } else {
                model_edits += 1;
            }

            let counter = select_edit(candidates, &original);
            tracing::debug!("Row {}: {:?} -> {:?}", row, original, counter);

            pairs.push(EditPair { original, counter });
        }

        Ok(GenerationResult {
            pairs,
            model_edits,
            fallbacks,
        })
    }

    async fn export(&self, result: GenerationResult) -> Result<String> {
        let dest = self.config.dest_csv().to_string();
        tracing::debug!("Serializing {} rows to {}", result.pairs.len(), dest);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([COUNTER_COLUMN])?;
        for pair in &result.pairs {
            writer.write_record([pair.counter.as_str()])?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| GenError::ProcessingError {
                message: format!("failed to finalize output CSV: {}", e),
            })?;

        self.storage.write_file(&dest, &data).await?;

        Ok(dest)
    }
}
