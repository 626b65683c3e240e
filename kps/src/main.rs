use anyhow::Result;
use clap::{Parser, ValueEnum};
use kps_types::Theme;
use kube_ps::config::SegmentConfig;
use kube_ps::prompt::Prompt;
use kube_ps::prompt::context::{PromptArgs, PromptContext};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter, e.g. `KPS_LOG=debug`. Logging is off when unset.
const LOG_ENV: &str = "KPS_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeName {
    Default,
    LowContrast,
}

impl ThemeName {
    fn theme(self) -> Theme {
        match self {
            ThemeName::Default => Theme::default(),
            ThemeName::LowContrast => Theme::low_contrast(),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show `gke_<project>_<zone>_<cluster>` contexts as `<cluster>`
    #[arg(long)]
    shorten_gke_names: bool,

    /// Show EKS cluster ARNs as the bare cluster name
    #[arg(long)]
    shorten_eks_names: bool,

    /// Append the current namespace after the cluster segment
    #[arg(long)]
    show_namespace: bool,

    #[arg(long, value_enum, default_value_t = ThemeName::Default)]
    theme: ThemeName,

    /// Print segment contents without colors
    #[arg(long)]
    plain: bool,
}

impl Cli {
    fn prompt_args(&self) -> PromptArgs {
        PromptArgs {
            shorten_gke_names: self.shorten_gke_names,
            shorten_eks_names: self.shorten_eks_names,
            show_namespace: self.show_namespace,
        }
    }
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize tracing: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kps: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let home_dir = dirs::home_dir();
    let config = SegmentConfig::from_getter(|key| std::env::var(key).ok(), home_dir.as_deref());
    debug!("{:?}", config);

    let theme = cli.theme.theme();
    let context = PromptContext {
        config: &config,
        args: cli.prompt_args(),
        theme: &theme,
    };

    let mut prompt = Prompt::new();
    prompt.render(&context);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    prompt.print_segments(&mut out, cli.plain)?;
    Ok(())
}
