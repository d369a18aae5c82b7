use tokio::io::{AsyncBufReadExt, BufReader};
use zeroize::Zeroizing;

use hashgen_core::{Deriver, LatestDeriver, Session, Snapshot};

use crate::app::AppContext;
use crate::cli::WatchArgs;
use crate::helpers::parse_watch_line;
use crate::output::{render_watch_event, watch_event_json};
use crate::ui::{header, print, UiContext};

use super::unavailable_output;

pub fn handle_watch(ctx: &AppContext, args: &WatchArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, args.format.as_deref())?;
    let deriver = match ctx.deriver(args.algorithm.as_deref()) {
        Ok(deriver) => deriver,
        Err(err) => {
            if let Some(placeholder) = unavailable_output(&ui, &err) {
                print(&ui, &placeholder);
            }
            return Err(err);
        }
    };

    if !ctx.quiet() {
        print(&ui, &header(&ui, "watch", Some(deriver.algorithm())));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to start runtime: {}", e))?;
    runtime.block_on(run_watch(&ui, deriver))
}

/// Feed stdin edits through the latest-wins runner and print each published
/// snapshot. Edits superseded before they finish are never printed.
async fn run_watch(ui: &UiContext, deriver: Deriver) -> anyhow::Result<()> {
    let algorithm = deriver.algorithm();
    let mut session = Session::new(deriver.clone());
    let runner = LatestDeriver::new(deriver);
    let mut rx = runner.subscribe();
    let mut printed = 0u64;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = line.map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
                match line {
                    Some(line) => {
                        let line = Zeroizing::new(line);
                        let (passphrase, salt) = parse_watch_line(&line);
                        runner.submit_pair(passphrase, salt);
                    }
                    None => break,
                }
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                emit(ui, &mut session, &snapshot, algorithm)?;
                printed = snapshot.generation;
            }
        }
    }

    let snapshot = runner.settle().await;
    if snapshot.generation > printed {
        emit(ui, &mut session, &snapshot, algorithm)?;
    }
    Ok(())
}

fn emit(
    ui: &UiContext,
    session: &mut Session,
    snapshot: &Snapshot,
    algorithm: &str,
) -> anyhow::Result<()> {
    let transition = session.apply(snapshot.digests.clone());
    if ui.mode.is_json() {
        let value = watch_event_json(snapshot.generation, transition, &snapshot.digests, algorithm);
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!(
            "{}",
            render_watch_event(ui, snapshot.generation, transition, &snapshot.digests)
        );
    }
    Ok(())
}
