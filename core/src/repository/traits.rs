use crate::model::config::MementoConfig;
use anyhow::Result;
use std::path::Path;

pub trait ConfigRepository {
    fn load(&self) -> Result<MementoConfig>;
    fn save(&self, config: &MementoConfig) -> Result<()>;
    fn path(&self) -> &Path;
}
