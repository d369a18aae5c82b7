use hashgen_core::Algorithm;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{write_config, HashgenConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None).unwrap_or_else(|_| ctx.fallback_ui_context());
    let source = ctx.config_source()?;
    let path = source.path();

    if path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }

    let algorithm = match args.algorithm.as_deref() {
        Some(name) => name.parse::<Algorithm>().map_err(CliError::from)?,
        None => Algorithm::default(),
    };
    if let Some(format) = args.format.as_deref() {
        if format != "table" && format != "plain" {
            return Err(CliError::invalid_input(format!(
                "Unsupported format: {} (use table or plain)",
                format
            ))
            .into());
        }
    }

    let config = HashgenConfig::new(algorithm, args.format.clone());
    write_config(path, &config)?;
    tracing::info!(path = %path.display(), "config written");

    if !ctx.quiet() {
        let path_display = path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Config written",
                &[("Path", path_display.as_str()), ("Algorithm", algorithm.as_str())],
            ),
        );
    }
    Ok(())
}
