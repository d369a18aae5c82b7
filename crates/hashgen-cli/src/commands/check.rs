use hashgen_core::probe;

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None)?;
    let algorithm = ctx.algorithm(args.algorithm.as_deref())?;

    match probe(algorithm) {
        Ok(primitive) => {
            if ui.mode.is_json() {
                let value = serde_json::json!({
                    "status": "ok",
                    "algorithm": algorithm.as_str(),
                    "digest_len": primitive.digest_len(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else if !ctx.quiet() {
                let digest_len = format!("{} bytes", primitive.digest_len());
                let hex_len = (primitive.digest_len() * 2).to_string();
                print(
                    &ui,
                    &receipt(
                        &ui,
                        "Hash primitive OK",
                        &[
                            ("Algorithm", algorithm.as_str()),
                            ("Digest length", digest_len.as_str()),
                            ("Hex length", hex_len.as_str()),
                            ("Self test", "passed"),
                        ],
                    ),
                );
            }
            Ok(())
        }
        Err(err) => {
            if ui.mode.is_json() {
                let value = serde_json::json!({
                    "status": "error",
                    "algorithm": algorithm.as_str(),
                    "error": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Err(CliError::from(err).into())
        }
    }
}
