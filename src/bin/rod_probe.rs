use std::env;
use std::time::Instant;

use rod_cutting::algorithms::extended::extended_bottom_up_cut_rod;
use rod_cutting::utils::compositions;
use rod_cutting::{PriceTable, RodCutError, RodCutterBuilder, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    #[cfg(feature = "cli-logging")]
    init_logging();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("rod_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Rod-cutting probe: lengths 1..={}", options.max_length);
    eprintln!("{}", "=".repeat(72));
    eprintln!("  • revenue: best total price for the rod");
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches the extended bottom-up table");
    eprintln!();

    let prices = probe_prices(options.max_length);
    let revenues = match extended_bottom_up_cut_rod(&prices, options.max_length) {
        Ok((revenues, _)) => revenues,
        Err(err) => {
            eprintln!("rod_probe: {err}");
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    for (idx, &strategy) in options.strategies.iter().enumerate() {
        eprintln!(
            "[{}/{}] {}",
            idx + 1,
            options.strategies.len(),
            describe(strategy)
        );
        let limit = if strategy == Strategy::Naive {
            options.naive_limit
        } else {
            options.max_length
        };
        let cutter = RodCutterBuilder::new(prices.clone())
            .with_strategy(strategy)
            .with_recursion_limit(limit)
            .build();
        for length in 1..=options.max_length {
            measurements.push(measure(strategy.as_str(), length, &mut sys, || {
                match cutter.revenue(length) {
                    Ok(revenue) if Some(revenue) == revenues.get(length) => {
                        (Some(revenue), VerificationStatus::Passed, None)
                    }
                    Ok(revenue) => (
                        Some(revenue),
                        VerificationStatus::Failed,
                        Some(format!("expected {:?}", revenues.get(length))),
                    ),
                    Err(err @ RodCutError::RecursionLimit { .. }) => {
                        let detail = match compositions(length) {
                            Some(count) => format!("{err}; {count} compositions"),
                            None => err.to_string(),
                        };
                        (None, VerificationStatus::Skipped, Some(detail))
                    }
                    Err(err) => (None, VerificationStatus::Failed, Some(err.to_string())),
                }
            }));
        }
    }

    eprintln!("[cuts] Reconstructing optimal cuts from the choice table");
    let solver = RodCutterBuilder::new(prices.clone()).build();
    for length in 1..=options.max_length {
        measurements.push(measure("cuts", length, &mut sys, || match solver.solve(length) {
            Ok(solution) => {
                let value = prices.value_of(&solution.cuts);
                let status = if value == revenues.get(length) {
                    VerificationStatus::Passed
                } else {
                    VerificationStatus::Failed
                };
                (value, status, Some(solution.to_string()))
            }
            Err(err) => (None, VerificationStatus::Failed, Some(err.to_string())),
        }));
    }
    eprintln!();

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("rod_probe output error: {err}");
        std::process::exit(1);
    }

    if failed > 0 {
        eprintln!("✗ {failed} measurement(s) disagree with the baseline");
        std::process::exit(1);
    }
    eprintln!("✓ all strategies agree");
}

#[cfg(feature = "cli-logging")]
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn describe(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Naive => "Naive recursion (no memo)",
        Strategy::Memoized => "Top-down recursion with memo table",
        Strategy::BottomUp => "Bottom-up table filling",
        Strategy::Extended => "Extended bottom-up (revenue + first cut)",
    }
}

/// Textbook prices up to 10, then a deterministic extension for longer probes.
fn probe_prices(max_length: usize) -> PriceTable<u64> {
    let classic = PriceTable::classic();
    PriceTable::from_prices((1..=max_length.max(10)).map(|len| {
        classic
            .price(len)
            .map(u64::from)
            .unwrap_or_else(|| 3 * len as u64 + (len * len % 7) as u64)
    }))
}

struct Options {
    format: OutputFormat,
    max_length: usize,
    naive_limit: usize,
    strategies: Vec<Strategy>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Table;
        let mut max_length = 10usize;
        let mut naive_limit = 20usize;
        let mut strategies = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            if flag == "--help" || flag == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let value = match inline {
                Some(value) => value,
                None => args
                    .next()
                    .ok_or_else(|| format!("missing value after {flag}"))?
                    .into(),
            };
            match flag.as_str() {
                "--format" => format = OutputFormat::from_str(&value)?,
                "--max-length" => max_length = parse_length(&flag, &value)?,
                "--naive-limit" => naive_limit = parse_length(&flag, &value)?,
                "--strategy" => {
                    let strategy = value.parse::<Strategy>().map_err(|e| e.to_string())?;
                    strategies.push(strategy);
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }

        if strategies.is_empty() {
            strategies = Strategy::ALL.to_vec();
        }
        Ok(Self {
            format,
            max_length,
            naive_limit,
            strategies,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin rod_probe [-- <options>]

Options:
  --format <table|csv|json>     Output format (default: table)
  --max-length <N>              Longest rod to solve (default: 10)
  --naive-limit <N>             Longest rod handed to the naive strategy (default: 20)
  --strategy <name>             naive, memoized, bottom-up or extended; repeatable (default: all)
  -h, --help                    Print this help message

Examples:
  cargo run --bin rod_probe
  cargo run --bin rod_probe -- --format csv --max-length 30 --strategy memoized
  RUST_LOG=debug cargo run --bin rod_probe --features cli-logging
"
        );
    }
}

fn parse_length(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{flag} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    length: usize,
    revenue: Option<u64>,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    Skipped,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Skipped => "skipped",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn measure<F>(scenario: &'static str, length: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (Option<u64>, VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (revenue, status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);
    Measurement {
        scenario,
        length,
        revenue,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn revenue_label(m: &Measurement) -> String {
    m.revenue.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,length,revenue,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.6},{},{},\"{}\"",
            m.scenario,
            m.length,
            revenue_label(m),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    println!(
        "{:<col1$}  {:>6}  {:>8}  {:>10}  {:>13}  {:>8}  {}",
        "scenario", "length", "revenue", "wall_s", "rss_delta_kib", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<6}  {:-<8}  {:-<10}  {:-<13}  {:-<8}  {:-<12}",
        "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>6}  {:>8}  {:>10.6}  {:>13}  {:>8}  {}",
            m.scenario,
            m.length,
            revenue_label(m),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"length\":{},\"revenue\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.length,
            m.revenue.map(|r| r.to_string()).unwrap_or_else(|| "null".to_string()),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
