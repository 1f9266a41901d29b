#[tokio::main]
async fn main() {
    if let Err(e) = symptom_guide_lib::run().await {
        tracing::error!("{e}");
        eprintln!("symptom-guide: {e}");
        std::process::exit(1);
    }
}
