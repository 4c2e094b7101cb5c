use clap::{Parser, Subcommand};
use joinery_site::form::{EndpointTransport, EnquiryForm, NotificationKind};
use joinery_site::pages::{self, Route};
use joinery_site::server::{self, AppState};
use joinery_site::{config, output, resolve};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Parser)]
#[command(name = "joinery-site")]
#[command(about = "Marketing site for a carpentry and joinery business")]
#[command(long_about = "\
Marketing site for a carpentry and joinery business

Every page is assembled from sections stored in a Contentful space. A section
the CMS cannot supply is replaced by built-in copy, so the site always renders.
Enquiries posted by the site's forms are relayed as email through Brevo.

Configuration (all optional):

  config.toml                      # Site, server, CMS, email and theme settings
  assets/                          # Images served under /assets/

Secrets come from the environment:
  API_KEY / BREVO_API_KEY          Email provider key
  SENDER_EMAIL / BREVO_SENDER_EMAIL  Business address (sender and recipient)
  CONTENTFUL_SPACE_ID              CMS space
  CONTENTFUL_ACCESS_TOKEN          CMS delivery token

Run 'joinery-site gen-config' to generate a documented config.toml.")]
#[command(version = env!("SITE_VERSION"))]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug detail (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Only log warnings and errors (overridden by RUST_LOG)
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site and the enquiry endpoint
    Serve {
        /// Listen address, overriding server.bind
        #[arg(long)]
        bind: Option<String>,
    },
    /// Resolve every page and report which sections come from fallbacks
    Check {
        /// Fail if any section is served from its fallback
        #[arg(long)]
        strict: bool,
    },
    /// Submit an enquiry to a running site, as its forms do
    Enquire(EnquireArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct EnquireArgs {
    /// Base URL of the running site
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    site: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// Defaults to enquiry.default_project_type
    #[arg(long)]
    project_type: Option<String>,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Email or Phone
    #[arg(long, default_value = "")]
    contact: String,
    #[arg(long, default_value = "")]
    timeline: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Serve { bind } => {
            let mut site_config = load_site_config(cli.config.as_deref())?;
            if let Some(bind) = bind {
                site_config.server.bind = bind;
                site_config.validate()?;
            }
            let state = AppState::from_config(site_config)?;
            server::serve(state).await?;
        }
        Command::Check { strict } => {
            let site_config = load_site_config(cli.config.as_deref())?;
            let state = AppState::from_config(site_config)?;
            let mut reports = Vec::new();
            for route in Route::ALL {
                reports.push((route, pages::report_for(route, state.content.as_ref()).await));
            }
            output::print_check_output(&reports);
            let all: Vec<_> = reports.iter().flat_map(|(_, r)| r.iter().copied()).collect();
            if strict && resolve::any_fallback(&all) {
                return Err("some sections are served from fallbacks".into());
            }
        }
        Command::Enquire(args) => {
            let site_config = load_site_config(cli.config.as_deref())?;
            let mut form = EnquiryForm::new(&site_config.enquiry.default_project_type);
            {
                let fields = form.fields_mut();
                fields.name = args.name;
                fields.email = args.email;
                fields.phone = args.phone;
                if let Some(project_type) = args.project_type {
                    fields.project_type = project_type;
                }
                fields.property_location = args.location;
                fields.project_description = args.description;
                fields.preferred_contact = args.contact;
                fields.timeline = args.timeline;
            }
            let transport = EndpointTransport::new(
                &args.site,
                Duration::from_secs(site_config.email.timeout_secs),
            )?;
            let notification = form.submit(&transport).await?;
            output::print_notification(&notification);
            if notification.kind == NotificationKind::Failure {
                return Err("enquiry was not sent".into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the verbosity flags pick the level for this
/// crate.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("joinery_site=debug,info")
    } else {
        EnvFilter::new("joinery_site=info,warn")
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load config, then overlay secrets from the environment.
///
/// An explicit `--config` must exist; the implicit `./config.toml` may not.
fn load_site_config(
    path: Option<&Path>,
) -> Result<config::SiteConfig, Box<dyn std::error::Error>> {
    let path = match path {
        Some(path) if !path.exists() => {
            return Err(format!("config file not found: {}", path.display()).into());
        }
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_CONFIG),
    };
    let mut site_config = config::load_config(&path)?;
    site_config.apply_env(|key| std::env::var(key).ok());
    Ok(site_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_must_exist() {
        let tmp = TempDir::new().unwrap();
        let err = load_site_config(Some(&tmp.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("config file not found"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        std::fs::write(&path, "[server]\nbind = \"127.0.0.1:4000\"\n").unwrap();
        let site_config = load_site_config(Some(&path)).unwrap();
        assert_eq!(site_config.server.bind, "127.0.0.1:4000");
    }
}
