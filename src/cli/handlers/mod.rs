mod init;
mod list;
mod query;
mod serve;
mod show;
mod utils;

pub use init::handle_init;
pub use list::{ListParams, handle_list};
pub use query::handle_query;
pub use serve::{ServeParams, handle_serve};
pub use show::handle_show;

use crate::config::BlogConfig;
use crate::error::Result;
use crate::storage::EntityStore;
use std::path::Path;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub store: Arc<EntityStore>,
}

impl CommandContext {
    pub fn new(config: BlogConfig, project_root: &Path) -> Result<Self> {
        let store = Arc::new(EntityStore::open(&config, project_root)?);
        Ok(Self { config, store })
    }
}
