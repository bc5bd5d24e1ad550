//! Logic Module - Inference & Adapter Engines
//!
//! - `features/` - feature schema and validated records
//! - `model/` - classifier wrapper (ONNX) and risk tier mapping
//! - `explain` - top-factor ranking
//! - `pipeline` - per-request prediction orchestration
//! - `weather/` - external weather source adapter

pub mod explain;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod weather;
