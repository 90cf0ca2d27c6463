//! Handler for the `report` command.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::ReportArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::domain::ReportKind;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_report_service;

/// Compose one report now, print it, and optionally send it.
pub async fn execute(config_path: Option<&Path>, args: &ReportArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let kind = ReportKind::from(args.kind);
    let service = build_report_service(&config, !args.send)?;

    let pb = output::spinner("Fetching indicators");
    let text = service.compose(kind).await;
    output::spinner_success(&pb, "Indicators fetched");

    if args.send {
        service.deliver(kind, &text).await?;
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "report",
            "kind": kind.as_str(),
            "text": text,
            "sent": args.send,
        }));
        return Ok(());
    }

    output::section(&format!("Report ({kind})"));
    output::lines(&text);
    if args.send {
        output::success("Sent to Telegram");
    } else {
        output::hint("pass --send to deliver this report");
    }
    Ok(())
}
