use clap::Parser;
use nominee_common::validate;
use nominee_roster::{candidate, cli, config, error, logger, photo_store, session};
use cli::{Cli, Commands, SelectField};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Form => {
            session::run_form_session(&config)?;
        }

        Commands::Validate { input, json } => {
            if !input.exists() {
                return Err(error::RosterError::FileNotFound(input.display().to_string()));
            }

            let mut store = photo_store::FilePhotoStore::default();
            let candidate = candidate::CandidateFile::load(&input)?.into_candidate(&mut store)?;

            match validate(&candidate) {
                Ok(nominee) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&nominee)?);
                    } else {
                        println!("✔ {}", nominee_common::display_line(&nominee));
                    }
                }
                Err(errors) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&errors)?);
                    } else {
                        for (field, message) in errors.iter() {
                            println!("✖ {}: {}", field.name(), message);
                        }
                    }
                    return Err(error::RosterError::InvalidCandidate(errors.len()));
                }
            }
        }

        Commands::Options { field } => {
            let selected = field.map_or(SelectField::ALL.to_vec(), |f| vec![f]);
            for set in selected {
                println!("{}:", set.field().name());
                for value in set.values() {
                    println!("  {}", value);
                }
            }
        }

        Commands::Config { title, preview_width, confirm_delete, show } => {
            let mut config = config;
            let changed = title.is_some() || preview_width.is_some() || confirm_delete.is_some();

            if let Some(title) = title {
                config.form.title = title;
            }
            if let Some(width) = preview_width {
                config.form.preview_width_px = width;
            }
            if let Some(confirm) = confirm_delete {
                config.confirm_delete = confirm;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  見出し: {}", config.form.title);
                println!("  プレビュー幅: {}px", config.form.preview_width_px);
                println!("  削除確認: {}", config.confirm_delete);
            }
        }
    }

    Ok(())
}
