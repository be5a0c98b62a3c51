//! Line-delimited JSON mode: one request per stdin line, one reply per
//! stdout line. Lets another process drive a farm without the menu.

use anyhow::Result;
use farm_core::{
    command::FarmCommand, event::FarmEvent, farm::FarmState, snapshot::FarmSnapshot,
};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Command { command: FarmCommand },
    Quit,
}

#[derive(Debug, Serialize)]
struct IpcReply {
    ok:    bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<FarmEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    state: FarmSnapshot,
}

pub fn run<R: BufRead, W: Write>(farm: &mut FarmState, mut input: R, mut output: W) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("runner: malformed request: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(output, "{err_json}")?;
                output.flush()?;
                continue;
            }
        };

        let reply = match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => IpcReply {
                ok:    true,
                event: None,
                error: None,
                state: farm.snapshot(),
            },
            IpcRequest::Command { command } => match farm.apply(command) {
                Ok(event) => IpcReply {
                    ok:    true,
                    event: Some(event),
                    error: None,
                    state: farm.snapshot(),
                },
                Err(e) => IpcReply {
                    ok:    false,
                    event: None,
                    error: Some(e.to_string()),
                    state: farm.snapshot(),
                },
            },
        };
        writeln!(output, "{}", serde_json::to_string(&reply)?)?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Cursor;

    fn replies(farm: &mut FarmState, lines: &[&str]) -> Vec<Value> {
        let mut output = Vec::new();
        run(farm, Cursor::new(lines.join("\n")), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn commands_reply_with_event_and_state() {
        let mut farm = FarmState::standard();

        let out = replies(
            &mut farm,
            &[
                r#"{"type":"command","command":{"cmd":"plant","crop":"pepper"}}"#,
                r#"{"type":"command","command":{"cmd":"advance","days":5}}"#,
                r#"{"type":"get_state"}"#,
            ],
        );

        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["ok"], true);
        assert_eq!(out[0]["event"]["type"], "planted");
        assert_eq!(out[1]["event"]["newly_ready"], 1);
        assert_eq!(out[2]["state"]["plots"][0]["ready"], true);
        assert!(out[2].get("event").is_none());
    }

    #[test]
    fn rejections_are_replies_not_failures() {
        let mut farm = FarmState::standard();

        let out = replies(
            &mut farm,
            &[r#"{"type":"command","command":{"cmd":"sell_crops","crop":"pepper","qty":1}}"#],
        );

        assert_eq!(out[0]["ok"], false);
        assert!(out[0]["error"].as_str().unwrap().contains("Not enough pepper"));
        assert_eq!(out[0]["state"]["gold"], 20);
    }

    #[test]
    fn malformed_lines_are_reported_and_quit_stops_the_loop() {
        let mut farm = FarmState::standard();

        let out = replies(
            &mut farm,
            &[
                "not json",
                "",
                r#"{"type":"quit"}"#,
                r#"{"type":"command","command":{"cmd":"buy_plot"}}"#,
            ],
        );

        assert_eq!(out.len(), 1);
        assert!(out[0]["error"].is_string());
        assert_eq!(farm.plot_capacity(), 5);
    }
}
