#[tokio::main]
async fn main() {
    gaima::start_server().await;
}
