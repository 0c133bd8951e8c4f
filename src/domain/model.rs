use serde::{Deserialize, Serialize};

/// 一個原句與其反事實編輯的配對
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPair {
    pub original: String,
    pub counter: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    pub pairs: Vec<EditPair>,
    pub model_edits: usize,
    pub fallbacks: usize,
}

/// Execution device for model inference. The serving process binds the
/// model to whichever device each request names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
    Cuda,
}

impl Device {
    /// 明確旗標優先，未指定時自動偵測
    pub fn resolve(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Device::Cuda,
            Some(false) => Device::Cpu,
            None => Device::detect(),
        }
    }

    pub fn detect() -> Self {
        let has_driver = std::path::Path::new("/proc/driver/nvidia/version").exists();
        let visible = std::env::var("CUDA_VISIBLE_DEVICES")
            .map(|v| {
                let v = v.trim();
                !v.is_empty() && v != "-1"
            })
            .unwrap_or(false);

        if has_driver || visible {
            Device::Cuda
        } else {
            Device::Cpu
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Cuda => "cuda",
        }
    }
}
