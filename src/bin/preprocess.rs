//! Batch entry point: runs the default preprocessing pipeline on the
//! fixed input path and writes the fixed CSV output path.

use logprep::{run, PipelineConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("logprep=info".parse().unwrap()),
        )
        .init();

    let config = PipelineConfig::default();
    match run(&config) {
        Ok(report) => {
            println!("{}", report.preview);
            println!(
                "Preprocessing completed and saved as '{}'.",
                config.output_path.display()
            );
        }
        Err(error) => {
            eprintln!("preprocessing failed: {error}");
            std::process::exit(1);
        }
    }
}
