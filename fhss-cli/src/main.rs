// fhss-hops: print the hop sequence a paired firmware derives from a binding phrase.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fhss_core::report::{format_frequencies, format_sequence, HopReport};
use fhss_core::{domain, FhssCore};
use tracing::info;

use config::{LogFormat, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "fhss-hops", version, about = "Generate FHSS frequency sequence")]
struct Cli {
    /// Regulatory domain (FCC915, AU915, EU868, IN866) [default: FCC915]
    #[arg(long)]
    domain: Option<String>,
    /// Binding phrase (comma-separated integers or any string) [default: 42,13,9,8]
    #[arg(long)]
    phrase: Option<String>,
    /// Report format on stdout [default: text]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    /// TOML file with domain/phrase/format; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also print the centre frequency of every hop
    #[arg(long)]
    frequencies: bool,
    /// Print the domain table and exit
    #[arg(long)]
    list_domains: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    if cli.list_domains {
        print!("{}", domain_table());
        return Ok(());
    }

    let cfg = config::load(cli.config.as_deref())?.merge(cli.domain, cli.phrase, cli.format);
    let params = domain::lookup(&cfg.domain).context("invalid --domain")?;

    let core = FhssCore::with_domain(&cfg.phrase, params);
    let seq = core.sequence();
    info!("UID: {}", core.uid());
    info!("Seed: {}", core.seed());
    info!("Regulatory Domain: {}", params.name);
    info!("Sync Channel: {}", seq.sync_channel());
    info!("Total Hops: {}", seq.len());

    print!("{}", render(&core, cfg.format, cli.frequencies)?);
    Ok(())
}

/// Report body for stdout.
fn render(core: &FhssCore, format: OutputFormat, frequencies: bool) -> anyhow::Result<String> {
    let hops = core.sequence().as_slice();
    match format {
        OutputFormat::Text => {
            let mut out = String::from("FHSS Sequence (indices):\n");
            out.push_str(&format_sequence(hops));
            if frequencies {
                out.push_str("FHSS Sequence (hop channel Hz):\n");
                out.push_str(&format_frequencies(hops, core.domain()));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut report = HopReport::new(core);
            if frequencies {
                report = report.with_frequencies(core.domain());
            }
            let mut json = serde_json::to_string_pretty(&report).context("serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn domain_table() -> String {
    let mut out = String::from("domain   start_hz   stop_hz    channels spacing_hz sync_center_hz\n");
    for d in domain::all() {
        out.push_str(&format!(
            "{:<8} {:<10} {:<10} {:<8} {:<10} {}\n",
            d.name,
            d.freq_start,
            d.freq_stop,
            d.freq_count,
            d.channel_spacing(),
            d.sync_center_freq
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["fhss-hops"]).unwrap();
        assert!(cli.domain.is_none());
        assert!(cli.phrase.is_none());
        assert_eq!(cli.log_format, LogFormat::Text);
        assert!(!cli.list_domains);
        let cfg = config::load(None).unwrap().merge(cli.domain, cli.phrase, cli.format);
        assert_eq!(cfg.domain, "FCC915");
        assert_eq!(cfg.phrase, "42,13,9,8");
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from([
            "fhss-hops",
            "--domain",
            "IN866",
            "--phrase",
            "hello",
            "--format",
            "json",
            "--frequencies",
        ])
        .unwrap();
        assert_eq!(cli.domain.as_deref(), Some("IN866"));
        assert_eq!(cli.phrase.as_deref(), Some("hello"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.frequencies);
    }

    #[test]
    fn bad_format_rejected() {
        assert!(Cli::try_parse_from(["fhss-hops", "--format", "xml"]).is_err());
    }

    #[test]
    fn unknown_domain_fails_lookup() {
        let err = domain::lookup("EU433").context("invalid --domain").unwrap_err();
        assert!(format!("{err:#}").contains("unknown regulatory domain: EU433"));
    }

    #[test]
    fn text_render() {
        let core = FhssCore::new("42,13,9,8", "FCC915").unwrap();
        let out = render(&core, OutputFormat::Text, false).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("FHSS Sequence (indices):"));
        assert_eq!(lines.next(), Some("20 30 38 24 29 18 15  8 39 36 "));
        assert_eq!(out.lines().count(), 27);
    }

    #[test]
    fn text_render_with_frequencies() {
        let core = FhssCore::new("42,13,9,8", "IN866").unwrap();
        let out = render(&core, OutputFormat::Text, true).unwrap();
        assert!(out.contains("  0  2 866425000\n"));
        assert_eq!(out.lines().count(), 1 + 26 + 1 + 256);
    }

    #[test]
    fn json_render() {
        let core = FhssCore::new("42,13,9,8", "AU915").unwrap();
        let out = render(&core, OutputFormat::Json, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["domain"], "AU915");
        assert_eq!(v["sync_channel"], 10);
        assert_eq!(v["total_hops"], 256);
        assert_eq!(v["frequencies"].as_array().unwrap().len(), 256);
    }

    #[test]
    fn table_lists_every_domain() {
        let table = domain_table();
        assert_eq!(table.lines().count(), 5);
        assert!(table.contains("EU868"));
        assert!(table.contains("600000"));
    }
}
