use clap::Parser;
use fraudscope::apis::PredictClient;
use fraudscope::constants::DEFAULT_TIMEOUT_SECS;
use fraudscope::transaction::TransactionRecord;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "debug_predict")]
#[command(about = "Debug tool for the fraud prediction API", long_about = None)]
struct Args {
    /// Base URL of the prediction service
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Number of sequential requests to send
    #[arg(short, long, default_value = "5")]
    count: usize,

    /// Transaction JSON file (defaults to the built-in sample)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print every response
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("Prediction API Debug Tool\n");
    println!("{}", "=".repeat(80));

    let record = match &args.file {
        Some(path) => TransactionRecord::parse(&std::fs::read_to_string(path)?)?,
        None => TransactionRecord::sample(),
    };
    let client = PredictClient::new(&args.url, args.timeout, "fraudscope-debug")?;

    println!("Target:   {}", client.predict_url());
    println!("Features: {} numeric", record.numeric_feature_count());
    let missing = record.missing_features();
    if !missing.is_empty() {
        println!("Missing:  {}", missing.join(", "));
    }

    println!("\n[HEALTH CHECK]\n");
    match client.health_check().await {
        Ok(healthy) => println!("healthy: {}", healthy),
        Err(e) => println!("Health check failed: {}", e),
    }

    println!("\n[PREDICT x{}]\n", args.count);
    let mut latencies_ms = Vec::with_capacity(args.count);
    let mut failures = 0usize;

    for i in 0..args.count {
        let start = Instant::now();
        let outcome = client.post_predict(&record).await;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        latencies_ms.push(elapsed);

        match outcome {
            Ok(response) => {
                if args.verbose || i == 0 {
                    println!(
                        "{}. {} ({}) in {:.1}ms",
                        i + 1,
                        response.probability_percent(),
                        response.label(),
                        elapsed
                    );
                }
            }
            Err(e) => {
                failures += 1;
                println!("{}. error after {:.1}ms: {}", i + 1, elapsed, e);
            }
        }
    }

    println!("\n{}", "=".repeat(80));
    println!("\n[LATENCY]");
    if !latencies_ms.is_empty() {
        let total: f64 = latencies_ms.iter().sum();
        let min = latencies_ms.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = latencies_ms.iter().cloned().fold(0.0, f64::max);
        println!("Requests: {}", latencies_ms.len());
        println!("Failed:   {}", failures);
        println!("Min:      {:.1}ms", min);
        println!("Avg:      {:.1}ms", total / latencies_ms.len() as f64);
        println!("Max:      {:.1}ms", max);
    }

    println!("\nFinished at {}", chrono::Local::now().format("%H:%M:%S"));

    Ok(())
}
