use std::sync::Arc;

use anyhow::Result;
use ton_inspector::{
    config::Config,
    presenter::TerminalView,
    service::{AccountInspector, TonApiClient},
};

#[derive(Debug, Default)]
struct CliArgs {
    address: Option<String>,
    base_url: Option<String>,
    json: bool,
    lenient: bool,
}

const USAGE: &str = "usage: ton-inspect <address> [--base-url URL] [--json] [--lenient]";

fn parse_args() -> Result<CliArgs> {
    let mut parsed = CliArgs::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => match args.next() {
                Some(v) => parsed.base_url = Some(v),
                None => anyhow::bail!("--base-url requires a value\n{}", USAGE),
            },
            "--json" => parsed.json = true,
            "--lenient" => parsed.lenient = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with("--") => anyhow::bail!("unknown option {}\n{}", other, USAGE),
            other => {
                // 地址中夹带空格时允许分多段传入，统一由 normalize_address 处理
                let address = parsed.address.get_or_insert_with(String::new);
                address.push_str(other);
            }
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 日志走 stderr，stdout 只输出结果
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ton_inspector=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let mut config = Config::from_env_and_file(std::env::var("CONFIG_PATH").ok().as_deref())?;
    if let Some(base_url) = args.base_url {
        config.tonapi.base_url = base_url;
    }
    if args.lenient {
        config.balance.strict_format = false;
    }
    config.validate()?;

    let client = Arc::new(TonApiClient::new(&config.tonapi));
    let inspector = AccountInspector::new(client, &config.explorer, &config.balance);
    let input = args.address.unwrap_or_default();

    if args.json {
        let report = inspector.report(&input).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut view = TerminalView::new(std::io::stdout().lock()).verbose(true);
    if inspector.inspect_into(&mut view, &input).await.is_none() {
        std::process::exit(1);
    }

    Ok(())
}
