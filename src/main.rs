use clap::Parser;
use kube_suggest::{
    Cli, Config, CostRates, InputSource, KubernetesLoader, OutputFormat, Result, SuggestError,
    SuggestOutput, Suggestion, WorkloadDescriptor, demo_suggestions, display_suggestions_table,
    init_logger, load_workloads, render_report, run_all_checks, top_suggestions,
};
use log::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("kube-suggest version v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logger(cli.verbose, cli.quiet)?;
    let config = Config::from_cli(&cli)?;

    let (source, total_workloads, suggestions) = if cli.demo {
        info!("Demo mode: showing sample suggestions");
        let demo = top_suggestions(demo_suggestions(), config.limit);
        (InputSource::Demo, 0, demo)
    } else {
        let (source, workloads) = match cli.manifests.as_deref() {
            Some(path) => {
                info!("Reading manifests from {}", path.display());
                let workloads = load_workloads(path, config.namespace.as_deref())?;
                (InputSource::Manifests, workloads)
            }
            None => match load_cluster_workloads(&config).await {
                Ok(workloads) => (InputSource::Cluster, workloads),
                Err(e) if e.is_cluster_failure() => exit_with_cluster_guidance(&e),
                Err(e) => return Err(e),
            },
        };

        if cli.output == OutputFormat::Report {
            println!("🔍 Analyzing your cluster for cost savings...\n");
        }

        (source, workloads.len(), analyze(&workloads, config.limit))
    };

    match cli.output {
        OutputFormat::Report => print!("{}", render_report(&suggestions)),
        OutputFormat::Table => display_suggestions_table(&suggestions)?,
        OutputFormat::Json => {
            let output = SuggestOutput::new(
                config.namespace.clone(),
                source,
                total_workloads,
                config.limit,
                suggestions,
            );
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn analyze(workloads: &[WorkloadDescriptor], limit: usize) -> Vec<Suggestion> {
    let rates = CostRates::default();
    debug!("Using cost rates: {:?}", rates);

    let all = run_all_checks(workloads, &rates);
    info!("Found {} suggestions, keeping top {}", all.len(), limit);
    top_suggestions(all, limit)
}

async fn load_cluster_workloads(config: &Config) -> Result<Vec<WorkloadDescriptor>> {
    // Another crate may have installed a provider already
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let loader = KubernetesLoader::new(config.clone()).await?;
    loader.get_workloads().await
}

fn exit_with_cluster_guidance(err: &SuggestError) -> ! {
    eprintln!("Error connecting to cluster: {}", err);
    eprintln!();
    eprintln!("Make sure that:");
    eprintln!("  • a kubeconfig exists (~/.kube/config or $KUBECONFIG)");
    eprintln!("  • the current context points at a reachable cluster (kubectl get nodes)");
    eprintln!("  • your credentials can list deployments");
    eprintln!();
    eprintln!("Run `kube-suggest --demo` to see a sample report without a cluster.");
    std::process::exit(1);
}
