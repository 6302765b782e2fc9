// ==========================================
// 工业站点智能看板 - 导入层
// ==========================================
// 职责: 启动时加载打包数据集
// 支持: JSON
// ==========================================

pub mod dataset_loader;
pub mod error;

pub use dataset_loader::DatasetLoader;
pub use error::{ImportError, ImportResult};
