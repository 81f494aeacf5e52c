#[tokio::main]
async fn main() {
    if let Err(e) = motorpool::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
