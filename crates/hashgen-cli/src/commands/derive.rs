use hashgen_core::DerivationInput;

use crate::app::AppContext;
use crate::cli::DeriveArgs;
use crate::errors::CliError;
use crate::helpers::{read_passphrase, read_salt, InputSource};
use crate::output::{digests_json, field_value, render_digests};
use crate::ui::format::{mask, single_line, truncate};
use crate::ui::{badge, header, hint, kv, print, Badge, UiContext};

use super::unavailable_output;

/// Longest salt shown in the pretty summary.
const SALT_DISPLAY_LEN: usize = 40;

pub fn handle_derive(ctx: &AppContext, args: &DeriveArgs) -> anyhow::Result<()> {
    if args.json && args.field.is_some() {
        return Err(CliError::invalid_input("--field cannot be used with --json").into());
    }
    let ui = ctx.ui_context(args.json, args.format.as_deref())?;

    // Obtain the primitive before reading any input so an unusable
    // environment fails once, up front.
    let deriver = match ctx.deriver(args.algorithm.as_deref()) {
        Ok(deriver) => deriver,
        Err(err) => {
            if args.field.is_none() {
                if let Some(placeholder) = unavailable_output(&ui, &err) {
                    print(&ui, &placeholder);
                }
            }
            return Err(err);
        }
    };

    let interactive = ui.is_interactive() && !args.no_input;
    let prompted = interactive && !args.stdin && args.passphrase.is_none();
    let source = InputSource {
        stdin: args.stdin,
        interactive,
        reveal: args.reveal || ctx.config()?.output.reveal,
    };
    let passphrase = read_passphrase(args.passphrase.as_deref(), source)?;
    let salt = read_salt(args.salt.as_deref(), prompted)?;

    let input = DerivationInput::new(passphrase.as_str(), salt.as_str());
    let digests = deriver.derive(&input);

    if let Some(field) = args.field {
        println!("{}", field_value(&digests, field));
        return Ok(());
    }

    if ui.mode.is_json() {
        let output = serde_json::to_string_pretty(&digests_json(&digests, deriver.algorithm()))?;
        println!("{}", output);
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui, &header(&ui, "derive", Some(deriver.algorithm())));
        print_input_summary(&ui, &input);
    }
    print(&ui, &render_digests(&ui, &digests));
    if digests.is_empty() && !ctx.quiet() {
        if ui.mode.is_pretty() {
            print(&ui, &badge(&ui, Badge::Warn, "Empty input"));
        }
        print(
            &ui,
            &hint(&ui, "Enter a passphrase and/or salt to derive identifiers."),
        );
    }
    Ok(())
}

/// Pretty mode only: masked passphrase and the salt being used.
fn print_input_summary(ui: &UiContext, input: &DerivationInput) {
    if !ui.mode.is_pretty() {
        return;
    }
    let salt = if input.salt().is_empty() {
        "(none)".to_string()
    } else {
        truncate(&single_line(input.salt()), SALT_DISPLAY_LEN)
    };
    print(ui, &kv(ui, "Passphrase", &mask(input.passphrase(), ui.unicode)));
    print(ui, &kv(ui, "Salt", &salt));
}
