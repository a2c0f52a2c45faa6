//! Worked example: the status output of a port-forwarding tool.
//!
//! The tunnel establishment itself (ssh subprocess, password exchange) is
//! somebody else's job; this example shows the output side of such a
//! tool: log-set status lines, a doc-set help text, and a table of active
//! forwards with log-styled status cells.
//!
//! Run with `NO_COLOR=1` (or any non-empty value) to see the plain-mode
//! passthrough.

use anyhow::Result;
use tinge::{RuleRegistry, StyleMode, StyleSpec, Styler};
use tinge_tabular::{render, Align, TableOptions};

const HELP: &str = "\
Usage:
  > fwd -l 4444 -r 22 user@172.16.20.101   # forward local :4444 to remote :22
  > fwd -R -l 12345 user@172.16.20.101     # reverse forward

Options:
  -l   local port
  -r   remote port
  -R   reverse mode";

fn main() -> Result<()> {
    let mode = if std::env::var_os("NO_COLOR").is_some() {
        StyleMode::Plain
    } else {
        StyleMode::Ansi
    };
    let styler = Styler::new(RuleRegistry::with_builtins(), mode);

    println!("{}", styler.apply(HELP, "doc"));
    println!();

    // The status lines an actual tunnel run would print.
    println!("{}", styler.apply("[*] checking for a local ssh client", "log"));
    println!(
        "{}{}",
        styler.apply("[!] No module pexpect, install it with ", "log"),
        styler.paint("`pip install pexpect`", &StyleSpec::new().mode("bold").fore("blue")),
    );
    println!("{}", styler.apply("[+] Local :4444 => 172.16.20.101:22", "log"));
    println!();

    let forwards = vec![
        vec![
            "local".to_string(),
            "remote".to_string(),
            "status".to_string(),
        ],
        vec![
            ":4444".to_string(),
            "172.16.20.101:22".to_string(),
            styler.apply("[+] up", "log"),
        ],
        vec![
            ":8080".to_string(),
            "10.0.0.5:80".to_string(),
            styler.apply("[!] timeout", "log"),
        ],
    ];
    let options = TableOptions::new().align(Align::Left);
    print!("{}", render(&forwards, &options)?);

    Ok(())
}
