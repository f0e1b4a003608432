use std::time::Duration;

use clap::{Parser, Subcommand};
use job_core::{CheckRemark, EnvVariableResolver, JobEntry, JobRun, RunnerConfig, SystemClock};
use job_entries::{DelayEntry, TimeUnit, WaitConfig};

// Códigos de salida: 0 = espera cumplida, 1 = run detenido o falla, 2 = uso.
const EXIT_ELAPSED: i32 = 0;
const EXIT_ABORTED: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(Parser)]
#[command(name = "job-cli", about = "Ejecuta entries de job de forma aislada")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Espera hasta que venza la duración o llegue Ctrl-C.
    Delay {
        /// Duración máxima; admite ${VAR} / %%VAR%% del entorno. 0 = sin límite.
        #[arg(long, default_value = "0")]
        timeout: String,
        #[arg(long, default_value = "seconds")]
        unit: TimeUnit,
        /// Sobrescribe JOBFLOW_POLL_INTERVAL_MS.
        #[arg(long)]
        poll_ms: Option<u64>,
        /// Emite diagnósticos detallados (JOBFLOW_LOG_DETAILED).
        #[arg(long)]
        detailed: bool,
        /// Imprime el resultado como JSON.
        #[arg(long)]
        json: bool,
        #[arg(long, default_value = "delay")]
        name: String,
    },
    /// Muestra las observaciones de validación del entry.
    Check {
        #[arg(long, default_value = "0")]
        timeout: String,
        #[arg(long, default_value = "seconds")]
        unit: TimeUnit,
    },
}

#[tokio::main]
async fn main() {
    job_core::init_dotenv();
    env_logger::init();
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Delay { timeout, unit, poll_ms, detailed, json, name } => {
            let mut config = RunnerConfig::from_env();
            if let Some(ms) = poll_ms {
                config = config.with_poll_interval(Duration::from_millis(ms));
            }
            if detailed {
                config = config.with_detailed(true);
            }
            let entry = DelayEntry::new(name).with_config(WaitConfig::new(timeout, unit));
            run_delay(entry, config, json).await
        }
        Command::Check { timeout, unit } => {
            let entry = DelayEntry::new("delay").with_config(WaitConfig::new(timeout, unit));
            let mut remarks: Vec<CheckRemark> = Vec::new();
            entry.check(&mut remarks);
            for r in remarks {
                println!("[{:?}] {}: {}", r.severity, r.source, r.text);
            }
            EXIT_ELAPSED
        }
    };
    std::process::exit(code);
}

async fn run_delay(entry: DelayEntry, config: RunnerConfig, json: bool) -> i32 {
    let mut run = JobRun::new().with_config(config);
    let flag = run.stop_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("ctrl-c received, stopping run");
            flag.stop();
        }
    });

    let handle = tokio::task::spawn_blocking(move || {
        let outcome = run.run_entry(&entry, &SystemClock, &EnvVariableResolver, None);
        (outcome, run.run_id())
    });
    let (outcome, run_id) = match handle.await {
        Ok(v) => v,
        Err(e) => {
            eprintln!("[job-cli delay] wait task failed: {e}");
            return EXIT_USAGE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("[job-cli delay] serialize error: {e}"),
        }
    } else {
        for d in &outcome.diagnostics {
            println!("[{:?}] {}", d.level, d.message);
        }
        println!("run={} succeeded={}", run_id, outcome.succeeded);
    }
    if outcome.succeeded { EXIT_ELAPSED } else { EXIT_ABORTED }
}
