// Audits one page's collected artifacts for `font-display: optional` fonts
// that were never preloaded, printing the audit product as JSON.
//
// Usage: font-preload-audit <artifacts.json> [config.json] [--records <records.json>]
//
// With `--records`, network records are read from a JSON array saved
// earlier instead of being rebuilt from the artifacts' devtools log.

use anyhow::{Context, Result, bail};
use font_preload_audit::{
    Artifacts, AuditConfig, AuditOutcome, AuditProduct, DevtoolsLogRecords, FontPreloadAudit,
    RecordedNetworkRecords,
};

const USAGE: &str =
    "usage: font-preload-audit <artifacts.json> [config.json] [--records <records.json>]";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    artifacts_path: String,
    config_path: Option<String>,
    records_path: Option<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut records_path = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--records" {
                let Some(path) = args.next() else {
                    bail!("--records requires a path\n{USAGE}");
                };
                records_path = Some(path);
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let Some(artifacts_path) = positional.next() else {
            bail!(USAGE);
        };
        let config_path = positional.next();
        if positional.next().is_some() {
            bail!("too many arguments\n{USAGE}");
        }

        Ok(Self {
            artifacts_path,
            config_path,
            records_path,
        })
    }
}

async fn load_config(path: Option<&str>) -> Result<AuditConfig> {
    let Some(path) = path else {
        return Ok(AuditConfig::default());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config {path}"))?;
    serde_json::from_str::<AuditConfig>(&raw).with_context(|| format!("Invalid config {path}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = load_config(args.config_path.as_deref()).await?;

    let json = tokio::fs::read_to_string(&args.artifacts_path)
        .await
        .with_context(|| format!("Failed to read artifacts {}", args.artifacts_path))?;
    let artifacts = Artifacts::from_json(&json)
        .with_context(|| format!("Invalid artifacts {}", args.artifacts_path))?;

    let audit = FontPreloadAudit::new(config);
    let product: AuditProduct = match &args.records_path {
        Some(path) => {
            log::info!("Reading network records from {path}");
            audit
                .audit(&artifacts, &RecordedNetworkRecords::new(path))
                .await?
        }
        None => audit.audit(&artifacts, &DevtoolsLogRecords).await?,
    };

    match product.outcome() {
        AuditOutcome::Fail => log::warn!(
            "{} font(s) with font-display: optional are not preloaded",
            product.details.items.len()
        ),
        AuditOutcome::Pass => log::info!("All font-display: optional fonts are preloaded"),
        AuditOutcome::NotApplicable => log::info!("No font declares font-display: optional"),
    }

    println!("{}", serde_json::to_string_pretty(&product)?);
    Ok(())
}
