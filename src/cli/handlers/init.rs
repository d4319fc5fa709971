use crate::config::{BlogConfig, CONFIG_FILE_NAME, DataSettings};
use crate::error::BlogError;
use crate::model::CollectionKind;
use crate::storage::{DataFormat, EntityStore, save_records};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(data_dir: String, format: DataFormat, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(BlogError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = BlogConfig {
        data: DataSettings {
            path: data_dir.clone(),
        },
        ..Default::default()
    };

    let data_path = cwd.join(&data_dir);
    let seed = EntityStore::seed()?;
    for kind in CollectionKind::ALL {
        let path = match kind {
            CollectionKind::Posts => {
                save_records(&data_path, kind, seed.posts().list_all(), format)?
            }
            CollectionKind::Comments => {
                save_records(&data_path, kind, seed.comments().list_all(), format)?
            }
            CollectionKind::Users => {
                save_records(&data_path, kind, seed.users().list_all(), format)?
            }
        };
        tracing::debug!(path = %path.display(), "Wrote data file");
    }

    config.save(&config_path)?;

    println!(
        "{} blogql project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
