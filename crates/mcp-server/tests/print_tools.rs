use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;
use tokio::process::Command;

mod support;

use support::{locate_context_mcp_bin, start_server, TIMEOUT};

#[tokio::test]
async fn print_tools_matches_list_tools() -> Result<()> {
    let bin = locate_context_mcp_bin()?;

    let output = Command::new(&bin)
        .arg("--print-tools")
        .output()
        .await
        .context("run context-mcp --print-tools")?;
    assert!(
        output.status.success(),
        "print-tools failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).context("decode print-tools stdout")?;
    let payload: Value = serde_json::from_str(&stdout).context("parse print-tools JSON")?;
    assert_eq!(
        payload
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        env!("CARGO_PKG_VERSION"),
        "print-tools version mismatch"
    );

    let printed: HashSet<String> = payload
        .get("tools")
        .and_then(Value::as_array)
        .context("print-tools missing tools array")?
        .iter()
        .filter_map(|tool| tool.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    let tmp = tempfile::tempdir().context("tempdir")?;
    let service = start_server(tmp.path()).await?;
    let tools = tokio::time::timeout(TIMEOUT, service.list_tools(Default::default()))
        .await
        .context("timeout listing tools")??;
    let listed: HashSet<String> = tools.tools.iter().map(|t| t.name.to_string()).collect();

    assert_eq!(printed, listed, "print-tools mismatch with list_tools");
    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn print_tools_tolerates_non_utf8_arguments() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bin = locate_context_mcp_bin()?;
    let output = Command::new(&bin)
        .arg(OsStr::from_bytes(b"--label=\xff\xfe"))
        .arg("--print-tools")
        .output()
        .await
        .context("run context-mcp with a non-UTF-8 argument")?;
    assert!(
        output.status.success(),
        "print-tools failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload: Value =
        serde_json::from_slice(&output.stdout).context("parse print-tools JSON")?;
    assert!(payload.get("tools").and_then(Value::as_array).is_some());
    Ok(())
}
