use anyhow::Context;
use brick_audit::adapters::colors::{add_color, ColorEntry};
use brick_audit::adapters::profiles::{default_categories, ProfileStore, DEFAULT_PROFILE_NAME};
use brick_audit::config::{LogFormat, ProfileAction};
use brick_audit::core::ConfigProvider;
use brick_audit::utils::error::ErrorSeverity;
use brick_audit::utils::{logger, validation::Validate};
use brick_audit::{AuditEngine, AuditError, AuditorConfig, Cli, Command, LocalStorage, StorePipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("🧱 Starting brick-audit");
    tracing::debug!("CLI args: {:?}", cli);

    let mut config = AuditorConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("Failed to load config file '{}'", cli.config))?;

    if let Command::Audit {
        format: Some(format),
        ..
    } = &cli.command
    {
        config.report.format = format.clone();
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.base_dir().to_string());

    let outcome = match cli.command {
        Command::Audit { mode, profile, .. } => {
            let json = config.wants_json();
            let pipeline = StorePipeline::new(storage, config)
                .with_mode(mode.into())
                .with_profile(profile)
                .with_json(json);
            AuditEngine::new(pipeline).run().await
        }
        Command::Profiles { action } => run_profiles(&storage, &config, action).await,
        Command::AddColor {
            bricklink_id,
            bricklink_name,
            lego_name,
            lego_id,
            category,
        } => {
            let entry = ColorEntry {
                bricklink_id,
                bricklink_name: bricklink_name.clone(),
                lego_name,
                lego_id,
                category,
            };
            add_color(&storage, &config.inventory.colors_csv, entry)
                .await
                .map(|created| {
                    if created {
                        "✅ Created new file and added color.".to_string()
                    } else {
                        format!("✅ Success! {} has been added.", bricklink_name)
                    }
                })
        }
    };

    match outcome {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ brick-audit failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run_profiles(
    storage: &LocalStorage,
    config: &AuditorConfig,
    action: ProfileAction,
) -> Result<String, AuditError> {
    let store = ProfileStore::new(storage, config.profile_dir());
    let pick = |name: Option<String>| {
        name.or_else(|| config.active_profile().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string())
    };

    match action {
        ProfileAction::List => Ok(store.list().await?.join("\n")),
        ProfileAction::Show { name } => {
            let categories = store.load(&pick(name)).await?;
            Ok(serde_json::to_string_pretty(&categories)?)
        }
        ProfileAction::Init { name } => {
            let name = pick(name);
            store.save(&name, &default_categories()).await?;
            Ok(format!("✅ Saved profile '{}'", name))
        }
    }
}
